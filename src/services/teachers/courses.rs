use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::responses::TeacherCoursesResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_teacher_courses(
    service: &TeacherService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 教师必须存在
    match storage.get_teacher_by_id(teacher_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                "Teacher not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get teacher information: {e}"),
                )),
            );
        }
    }

    match storage.list_courses_by_teacher(teacher_id).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherCoursesResponse {
                teacher_id,
                total: courses.len() as i64,
                items: courses,
            },
            "Teacher courses retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve teacher courses: {e}"),
            )),
        ),
    }
}
