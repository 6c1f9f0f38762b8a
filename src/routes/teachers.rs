use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::teachers::requests::TeacherQueryParams;
use crate::services::TeacherService;
use crate::utils::SafeTeacherIdI64;

// 懒加载的全局 TEACHER_SERVICE 实例
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

// HTTP处理程序
pub async fn list_teachers(
    req: HttpRequest,
    query: web::Query<TeacherQueryParams>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req, query.into_inner()).await
}

pub async fn get_teacher(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_teacher(&req, teacher_id.0).await
}

pub async fn list_teacher_courses(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_teacher_courses(&req, teacher_id.0)
        .await
}

pub async fn list_teacher_students(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .list_teacher_students(&req, teacher_id.0)
        .await
}

pub async fn get_teacher_top_student(
    req: HttpRequest,
    teacher_id: SafeTeacherIdI64,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.get_top_student(&req, teacher_id.0).await
}

// 配置路由
pub fn configure_teachers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teachers")
            .service(web::resource("").route(web::get().to(list_teachers)))
            .service(
                // 教师名下全部课程
                web::resource("/{teacher_id}/courses")
                    .route(web::get().to(list_teacher_courses)),
            )
            .service(
                // 教师名下全部课程的学生并集
                web::resource("/{teacher_id}/students")
                    .route(web::get().to(list_teacher_students)),
            )
            .service(
                // 教师名下成绩最高的学生
                web::resource("/{teacher_id}/top-student")
                    .route(web::get().to(get_teacher_top_student)),
            )
            .service(web::resource("/{teacher_id}").route(web::get().to(get_teacher))),
    );
}
