use super::entities::Teacher;
use crate::models::common::PaginationInfo;
use crate::models::courses::entities::Course;
use crate::models::students::entities::Student;
use serde::Serialize;

// 教师列表响应
#[derive(Debug, Serialize)]
pub struct TeacherListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Teacher>,
}

// 教师详情响应，附带课程数与自我介绍
#[derive(Debug, Serialize)]
pub struct TeacherDetailResponse {
    pub teacher: Teacher,
    pub course_count: u64,
    pub greeting: String,
}

// 教师名下课程响应
#[derive(Debug, Serialize)]
pub struct TeacherCoursesResponse {
    pub teacher_id: i64,
    pub total: i64,
    pub items: Vec<Course>,
}

// 教师名下学生响应（经由课程的传递关系）
#[derive(Debug, Serialize)]
pub struct TeacherStudentsResponse {
    pub teacher_id: i64,
    pub total: i64,
    pub items: Vec<Student>,
}
