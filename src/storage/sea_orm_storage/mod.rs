//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod courses;
mod students;
mod teachers;

use crate::config::AppConfig;
use crate::errors::{Result, RosterSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| RosterSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RosterSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| RosterSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| RosterSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RosterSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    courses::{
        entities::Course,
        requests::{CourseListQuery, CreateCourseRequest},
        responses::CourseListResponse,
    },
    students::{entities::Student, requests::CreateStudentRequest},
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, TeacherListQuery},
        responses::TeacherListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教师模块
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher> {
        self.create_teacher_impl(teacher).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse> {
        self.list_teachers_with_pagination_impl(query).await
    }

    async fn count_teachers(&self) -> Result<u64> {
        self.count_teachers_impl().await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn list_courses_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>> {
        self.list_courses_by_teacher_impl(teacher_id).await
    }

    async fn count_courses_by_teacher(&self, teacher_id: i64) -> Result<u64> {
        self.count_courses_by_teacher_impl(teacher_id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn list_students_by_course(
        &self,
        course_id: i64,
        sort_by_name: bool,
    ) -> Result<Vec<Student>> {
        self.list_students_by_course_impl(course_id, sort_by_name)
            .await
    }

    async fn list_students_by_teacher(&self, teacher_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_teacher_impl(teacher_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::models::teachers::requests::CreateTeacherRequest;
    use crate::roster;

    /// 每个测试使用独立的内存数据库
    ///
    /// 内存库随连接销毁，连接池必须固定为单连接。
    async fn memory_storage() -> SeaOrmStorage {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .expect("Failed to connect to in-memory SQLite");
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        SeaOrmStorage { db }
    }

    async fn seed_teacher(storage: &SeaOrmStorage, name: &str) -> i64 {
        storage
            .create_teacher_impl(CreateTeacherRequest {
                name: name.to_string(),
                photo_url: None,
            })
            .await
            .expect("Failed to seed teacher")
            .id
    }

    async fn seed_course(storage: &SeaOrmStorage, teacher_id: i64, name: &str) -> i64 {
        storage
            .create_course_impl(CreateCourseRequest {
                teacher_id,
                name: name.to_string(),
                start_date: chrono::Utc::now(),
                end_date: chrono::Utc::now() + chrono::Duration::days(30),
            })
            .await
            .expect("Failed to seed course")
            .id
    }

    async fn seed_student(storage: &SeaOrmStorage, course_id: i64, name: &str, grade: i32) -> i64 {
        storage
            .create_student_impl(CreateStudentRequest {
                course_id,
                name: name.to_string(),
                grade,
                age: 18,
            })
            .await
            .expect("Failed to seed student")
            .id
    }

    #[tokio::test]
    async fn test_course_students_include_only_that_course() {
        let storage = memory_storage().await;
        let teacher_id = seed_teacher(&storage, "Ari").await;
        let course_a = seed_course(&storage, teacher_id, "Dancing 201").await;
        let course_b = seed_course(&storage, teacher_id, "Ice Skating").await;

        let mia = seed_student(&storage, course_a, "Mia", 80).await;
        let noa = seed_student(&storage, course_a, "Noa", 90).await;
        seed_student(&storage, course_b, "Outsider", 100).await;

        // 同学名单即课程学生名单，包含本人，不含其他课程的学生
        let peers = storage
            .list_students_by_course_impl(course_a, false)
            .await
            .expect("Failed to list course students");
        let ids: Vec<i64> = peers.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![mia, noa]);
    }

    #[tokio::test]
    async fn test_course_students_sorted_by_name_when_requested() {
        let storage = memory_storage().await;
        let teacher_id = seed_teacher(&storage, "Bell").await;
        let course_id = seed_course(&storage, teacher_id, "Lego Engineering 101").await;

        for name in ["Riley", "Alex", "Quinn", "Alex", "Bailey"] {
            seed_student(&storage, course_id, name, 70).await;
        }

        // 默认为 id 升序
        let by_id = storage
            .list_students_by_course_impl(course_id, false)
            .await
            .expect("Failed to list course students");
        assert!(by_id.windows(2).all(|w| w[0].id < w[1].id));

        // sort_by_name 时按姓名非降序，同名按 id 升序
        let by_name = storage
            .list_students_by_course_impl(course_id, true)
            .await
            .expect("Failed to list course students");
        assert_eq!(by_name.len(), 5);
        assert!(
            by_name
                .windows(2)
                .all(|w| (w[0].name.as_str(), w[0].id) <= (w[1].name.as_str(), w[1].id))
        );
        assert_eq!(by_name[0].name, "Alex");
    }

    #[tokio::test]
    async fn test_teacher_students_span_all_courses() {
        let storage = memory_storage().await;
        let ari = seed_teacher(&storage, "Ari").await;
        let bell = seed_teacher(&storage, "Bell").await;
        let course_a = seed_course(&storage, ari, "Snack Science 101").await;
        let course_b = seed_course(&storage, ari, "Dancing 201").await;
        let course_c = seed_course(&storage, bell, "Ice Skating").await;

        let s1 = seed_student(&storage, course_a, "Kai", 70).await;
        let s2 = seed_student(&storage, course_b, "Sage", 95).await;
        let s3 = seed_student(&storage, course_b, "Noel", 95).await;
        seed_student(&storage, course_c, "Parker", 99).await;

        // 教师的学生是其全部课程学生的并集
        let students = storage
            .list_students_by_teacher_impl(ari)
            .await
            .expect("Failed to list teacher students");
        let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![s1, s2, s3]);

        // 同分时取 id 最小者
        let top = roster::top_student(&students).expect("teacher has students");
        assert_eq!(top.grade, 95);
        assert_eq!(top.id, s2);
    }

    #[tokio::test]
    async fn test_missing_ids_resolve_to_none() {
        let storage = memory_storage().await;

        assert!(
            storage
                .get_teacher_by_id_impl(999)
                .await
                .expect("query should succeed")
                .is_none()
        );
        assert!(
            storage
                .get_course_by_id_impl(999)
                .await
                .expect("query should succeed")
                .is_none()
        );
        assert!(
            storage
                .get_student_by_id_impl(999)
                .await
                .expect("query should succeed")
                .is_none()
        );

        // 空课程不是错误，返回空名单
        let teacher_id = seed_teacher(&storage, "Dom").await;
        let course_id = seed_course(&storage, teacher_id, "DOM 101").await;
        let students = storage
            .list_students_by_course_impl(course_id, false)
            .await
            .expect("Failed to list course students");
        assert!(students.is_empty());
    }

    #[tokio::test]
    async fn test_create_teacher_validates_on_creation() {
        let storage = memory_storage().await;

        let err = storage
            .create_teacher_impl(CreateTeacherRequest {
                name: "  ".to_string(),
                photo_url: None,
            })
            .await
            .expect_err("empty name must be rejected");
        assert_eq!(err.code(), "E004");

        let err = storage
            .create_teacher_impl(CreateTeacherRequest {
                name: "Ari".to_string(),
                photo_url: Some("not a url".to_string()),
            })
            .await
            .expect_err("malformed photo url must be rejected");
        assert_eq!(err.code(), "E004");
    }
}
