pub mod get;
pub mod grades;
pub mod list;
pub mod pairs;
pub mod students;
pub mod top_student;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::{CourseQueryParams, CourseStudentsParams};
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取课程列表
    pub async fn list_courses(
        &self,
        request: &HttpRequest,
        query: CourseQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, request, query).await
    }

    // 根据课程 ID 获取课程信息
    pub async fn get_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, request, course_id).await
    }

    // 获取课程学生名单
    pub async fn list_course_students(
        &self,
        request: &HttpRequest,
        course_id: i64,
        params: CourseStudentsParams,
    ) -> ActixResult<HttpResponse> {
        students::list_course_students(self, request, course_id, params).await
    }

    // 获取课程成绩序列
    pub async fn get_course_grades(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        grades::get_course_grades(self, request, course_id).await
    }

    // 随机生成两人分组
    pub async fn generate_course_pairs(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        pairs::generate_course_pairs(self, request, course_id).await
    }

    // 获取课程内成绩最高的学生
    pub async fn get_top_student(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        top_student::get_top_student(self, request, course_id).await
    }
}

/// 校验课程存在并加载其学生名单的辅助函数
///
/// 课程不存在或查询失败时返回可直接回复的 HttpResponse。
pub(super) async fn load_course_students(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    sort_by_name: bool,
) -> Result<Vec<Student>, HttpResponse> {
    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get course information: {e}"),
                )),
            );
        }
    }

    match storage.list_students_by_course(course_id, sort_by_name).await {
        Ok(students) => Ok(students),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve course students: {e}"),
            )),
        ),
    }
}
