//! 路径参数安全提取器
//!
//! 解析失败时直接返回 400 + 统一响应体，处理函数拿到的一定是合法 id。

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};

use crate::models::{ApiResponse, ErrorCode};

/// 通知 ID 提取器（路径段 `{id}`，必须为正整数）
pub struct SafeNotificationIdI64(pub i64);

impl FromRequest for SafeNotificationIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok());

        ready(match parsed {
            Some(id) if id > 0 => Ok(SafeNotificationIdI64(id)),
            _ => {
                let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "Invalid notification id",
                ));
                Err(InternalError::from_response("Invalid notification id", response).into())
            }
        })
    }
}
