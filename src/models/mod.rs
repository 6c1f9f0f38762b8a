//! 数据模型定义
//!
//! 业务实体与请求/响应模型，与 entity 模块中的数据库实体分离。

pub mod common;
pub mod courses;
pub mod students;
pub mod teachers;

pub use common::{ApiResponse, ErrorCode, PaginationInfo, PaginationQuery};

// 应用启动时间（用于启动耗时统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
