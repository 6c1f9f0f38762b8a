use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::responses::TeacherStudentsResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_teacher_students(
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

    // 教师的学生是其全部课程学生的并集
    match storage.list_students_by_teacher(teacher_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherStudentsResponse {
                teacher_id,
                total: students.len() as i64,
                items: students,
            },
            "Teacher students retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve teacher students: {e}"),
            )),
        ),
    }
}
