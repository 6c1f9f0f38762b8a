use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 课程查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct CourseQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    // flatten 之后查询字符串的值以字符串形式到达，需走自定义反序列化
    #[serde(
        default,
        deserialize_with = "crate::models::common::pagination::deserialize_optional_string_to_i64"
    )]
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

// 课程学生列表查询参数
#[derive(Debug, Deserialize)]
pub struct CourseStudentsParams {
    // 为 true 时按姓名字典序返回
    #[serde(default)]
    pub sort_by_name: bool,
}

// 创建课程请求（仅由启动种子数据使用，无对应 HTTP 接口）
#[derive(Debug, Clone)]
pub struct CreateCourseRequest {
    pub teacher_id: i64,
    pub name: String,
    pub start_date: chrono::DateTime<chrono::Utc>,
    pub end_date: chrono::DateTime<chrono::Utc>,
}

// 课程列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct CourseListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}
