use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, load_course_students};
use crate::models::ApiResponse;
use crate::models::courses::responses::CourseGradesResponse;
use crate::roster;

pub async fn get_course_grades(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let students = match load_course_students(&storage, course_id, false).await {
        Ok(students) => students,
        Err(response) => return Ok(response),
    };

    // 成绩顺序与学生名单的存储顺序一致
    let grades = roster::grades(&students);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CourseGradesResponse { course_id, grades },
        "Course grades retrieved successfully",
    )))
}
