use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师查询方法
    // 创建教师（仅种子数据使用）
    async fn create_teacher(&self, teacher: CreateTeacherRequest) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers_with_pagination(
        &self,
        query: TeacherListQuery,
    ) -> Result<TeacherListResponse>;
    // 统计教师总数（用于判断是否需要种子数据）
    async fn count_teachers(&self) -> Result<u64>;

    /// 课程查询方法
    // 创建课程（仅种子数据使用）
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 列出某教师名下的全部课程（按 id 升序）
    async fn list_courses_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>>;
    // 统计某教师名下的课程数
    async fn count_courses_by_teacher(&self, teacher_id: i64) -> Result<u64>;

    /// 学生查询方法
    // 创建学生（仅种子数据使用）
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 列出某课程的全部学生；sort_by_name 为 true 时按姓名字典序，否则按 id 升序
    async fn list_students_by_course(
        &self,
        course_id: i64,
        sort_by_name: bool,
    ) -> Result<Vec<Student>>;
    // 列出某教师名下全部课程的学生（经由课程表连接，按 id 升序）
    async fn list_students_by_teacher(&self, teacher_id: i64) -> Result<Vec<Student>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
