use super::entities::Student;
use serde::Serialize;

// 学生详情响应，附带自我介绍
#[derive(Debug, Serialize)]
pub struct StudentDetailResponse {
    pub student: Student,
    pub greeting: String,
}

// 同课程同学名单响应（包含学生本人）
#[derive(Debug, Serialize)]
pub struct StudentPeersResponse {
    pub student_id: i64,
    pub course_id: i64,
    pub total: i64,
    pub items: Vec<Student>,
}

// 最高分学生响应，范围内没有学生时为 null
#[derive(Debug, Serialize)]
pub struct TopStudentResponse {
    pub top_student: Option<Student>,
}
