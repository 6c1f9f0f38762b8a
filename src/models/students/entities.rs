use serde::{Deserialize, Serialize};

// 学生业务实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    // 学生ID
    pub id: i64,
    // 所在课程ID
    pub course_id: i64,
    // 学生姓名
    pub name: String,
    // 成绩（0-100）
    pub grade: i32,
    // 年龄
    pub age: i32,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    /// 自我介绍文案
    pub fn describe(&self) -> String {
        format!("Hi, I am {} and I am {} years old", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_formats_name_and_age() {
        let student = Student {
            id: 7,
            course_id: 1,
            name: "Mia Chen".to_string(),
            grade: 88,
            age: 19,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        assert_eq!(student.describe(), "Hi, I am Mia Chen and I am 19 years old");
    }
}
