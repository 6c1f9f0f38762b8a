use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::{CourseQueryParams, CourseStudentsParams};
use crate::services::CourseService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 COURSE_SERVICE 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseQueryParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn list_course_students(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    params: web::Query<CourseStudentsParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .list_course_students(&req, course_id.0, params.into_inner())
        .await
}

pub async fn get_course_grades(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course_grades(&req, course_id.0).await
}

pub async fn generate_course_pairs(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .generate_course_pairs(&req, course_id.0)
        .await
}

pub async fn get_course_top_student(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_top_student(&req, course_id.0).await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .service(web::resource("").route(web::get().to(list_courses)))
            .service(
                // 课程学生名单，支持 sort_by_name 参数
                web::resource("/{course_id}/students")
                    .route(web::get().to(list_course_students)),
            )
            .service(
                // 课程成绩序列
                web::resource("/{course_id}/grades").route(web::get().to(get_course_grades)),
            )
            .service(
                // 随机两人分组，每次请求重新抽取
                web::resource("/{course_id}/pairs").route(web::get().to(generate_course_pairs)),
            )
            .service(
                // 课程内成绩最高的学生
                web::resource("/{course_id}/top-student")
                    .route(web::get().to(get_course_top_student)),
            )
            .service(web::resource("/{course_id}").route(web::get().to(get_course))),
    );
}
