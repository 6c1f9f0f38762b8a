use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, load_course_students};
use crate::models::courses::requests::CourseStudentsParams;
use crate::models::courses::responses::CourseStudentsResponse;
use crate::models::ApiResponse;

pub async fn list_course_students(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
    params: CourseStudentsParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let students = match load_course_students(&storage, course_id, params.sort_by_name).await {
        Ok(students) => students,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CourseStudentsResponse {
            course_id,
            total: students.len() as i64,
            items: students,
        },
        "Course students retrieved successfully",
    )))
}
