use crate::models::common::PaginationQuery;
use serde::Deserialize;

// 教师查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct TeacherQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 创建教师请求（仅由启动种子数据使用，无对应 HTTP 接口）
#[derive(Debug, Clone)]
pub struct CreateTeacherRequest {
    pub name: String,
    pub photo_url: Option<String>,
}

// 教师列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct TeacherListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
