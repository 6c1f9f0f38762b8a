//! 路径参数安全提取器
//!
//! 将路径中的资源 ID 解析为正整数，非法输入直接以统一响应结构返回 400，
//! 不进入服务层。

use std::future::{Ready, ready};

use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal, $label:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let raw = req.match_info().get($param).unwrap_or_default();
                let parsed = raw.parse::<i64>().ok().filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let message = format!("Invalid {}: {}", $label, raw);
                        let response = HttpResponse::BadRequest().json(
                            ApiResponse::error_empty(ErrorCode::BadRequest, message.clone()),
                        );
                        Err(InternalError::from_response(message, response).into())
                    }
                })
            }
        }
    };
}

define_safe_id_extractor!(SafeTeacherIdI64, "teacher_id", "teacher id");
define_safe_id_extractor!(SafeCourseIdI64, "course_id", "course id");
define_safe_id_extractor!(SafeStudentIdI64, "student_id", "student id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_accepts_positive_id() {
        let req = TestRequest::default()
            .param("teacher_id", "42")
            .to_http_request();
        let mut payload = Payload::None;

        let extracted = SafeTeacherIdI64::from_request(&req, &mut payload)
            .await
            .expect("positive id should parse");
        assert_eq!(extracted.0, 42);
    }

    #[actix_web::test]
    async fn test_rejects_non_numeric_and_non_positive_ids() {
        for raw in ["abc", "0", "-3", ""] {
            let req = TestRequest::default()
                .param("course_id", raw)
                .to_http_request();
            let mut payload = Payload::None;

            let result = SafeCourseIdI64::from_request(&req, &mut payload).await;
            assert!(result.is_err(), "{raw:?} should be rejected");
        }
    }
}
