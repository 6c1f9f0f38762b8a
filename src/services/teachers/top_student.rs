use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::students::responses::TopStudentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::roster;

pub async fn get_top_student(
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

    let students = match storage.list_students_by_teacher(teacher_id).await {
        Ok(students) => students,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve teacher students: {e}"),
                )),
            );
        }
    };

    // 名下没有学生时 top_student 为 null，不视为错误
    let top_student = roster::top_student(&students).cloned();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TopStudentResponse { top_student },
        "Top student retrieved successfully",
    )))
}
