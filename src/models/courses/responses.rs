use super::entities::Course;
use crate::models::common::PaginationInfo;
use crate::models::students::entities::Student;
use serde::Serialize;

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Course>,
}

// 课程学生名单响应
#[derive(Debug, Serialize)]
pub struct CourseStudentsResponse {
    pub course_id: i64,
    pub total: i64,
    pub items: Vec<Student>,
}

// 课程成绩序列响应，顺序与学生名单的存储顺序一致
#[derive(Debug, Serialize)]
pub struct CourseGradesResponse {
    pub course_id: i64,
    pub grades: Vec<i32>,
}

// 随机分组响应：两人一组，人数为奇数时最后一组只有一人
#[derive(Debug, Serialize)]
pub struct CoursePairsResponse {
    pub course_id: i64,
    pub pairs: Vec<Vec<Student>>,
}
