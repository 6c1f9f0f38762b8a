use serde::{Deserialize, Serialize};

// 课程业务实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 授课教师ID
    pub teacher_id: i64,
    // 课程名称
    pub name: String,
    // 开课时间
    pub start_date: chrono::DateTime<chrono::Utc>,
    // 结课时间
    pub end_date: chrono::DateTime<chrono::Utc>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
