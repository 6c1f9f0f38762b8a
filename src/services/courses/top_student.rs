use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, load_course_students};
use crate::models::ApiResponse;
use crate::models::students::responses::TopStudentResponse;
use crate::roster;

pub async fn get_top_student(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let students = match load_course_students(&storage, course_id, false).await {
        Ok(students) => students,
        Err(response) => return Ok(response),
    };

    // 课程没有学生时 top_student 为 null，不视为错误
    let top_student = roster::top_student(&students).cloned();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TopStudentResponse { top_student },
        "Top student retrieved successfully",
    )))
}
