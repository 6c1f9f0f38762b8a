use serde::{Deserialize, Serialize};

// 教师业务实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    // 教师ID
    pub id: i64,
    // 教师姓名
    pub name: String,
    // 头像/照片 URL
    pub photo_url: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Teacher {
    /// 自我介绍文案，课程数由调用方统计后传入
    pub fn describe(&self, course_count: u64) -> String {
        format!(
            "Hi, I am {} and I teach {} courses",
            self.name, course_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_teacher() -> Teacher {
        Teacher {
            id: 1,
            name: "Ari".to_string(),
            photo_url: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_describe_contains_course_count() {
        let teacher = sample_teacher();
        let text = teacher.describe(3);
        assert_eq!(text, "Hi, I am Ari and I teach 3 courses");
        assert!(text.contains("3 courses"));
    }

    #[test]
    fn test_describe_with_zero_courses() {
        let teacher = sample_teacher();
        assert_eq!(teacher.describe(0), "Hi, I am Ari and I teach 0 courses");
    }
}
