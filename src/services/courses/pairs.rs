use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, load_course_students};
use crate::models::ApiResponse;
use crate::models::courses::responses::CoursePairsResponse;
use crate::roster;

pub async fn generate_course_pairs(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let students = match load_course_students(&storage, course_id, false).await {
        Ok(students) => students,
        Err(response) => return Ok(response),
    };

    // 每次请求都是一次独立的随机抽取，结果不可复现
    let mut rng = rand::rng();
    let pairs = roster::generate_pairs(students, &mut rng);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CoursePairsResponse { course_id, pairs },
        "Course pairs generated successfully",
    )))
}
