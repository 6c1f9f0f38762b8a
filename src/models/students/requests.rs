// 创建学生请求（仅由启动种子数据使用，无对应 HTTP 接口）
#[derive(Debug, Clone)]
pub struct CreateStudentRequest {
    pub course_id: i64,
    pub name: String,
    pub grade: i32,
    pub age: i32,
}
