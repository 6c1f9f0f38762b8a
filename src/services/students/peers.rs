use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::students::responses::StudentPeersResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_student_peers(
    service: &StudentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student information: {e}"),
                )),
            );
        }
    };

    // 同学即同一课程的全部学生，包含本人
    match storage.list_students_by_course(student.course_id, false).await {
        Ok(peers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentPeersResponse {
                student_id,
                course_id: student.course_id,
                total: peers.len() as i64,
                items: peers,
            },
            "Student peers retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve student peers: {e}"),
            )),
        ),
    }
}
