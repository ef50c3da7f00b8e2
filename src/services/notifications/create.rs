use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::NotificationService;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::models::notifications::responses::NotificationResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_create_notification;

pub async fn create_notification(
    service: &NotificationService,
    notification_data: CreateNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 必填字段与长度校验，不合法的请求不落库
    if let Err(msg) = validate_create_notification(&notification_data) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            msg,
        )));
    }

    match storage.create_notification(notification_data).await {
        Ok(notification) => {
            info!(
                "Notification {} created ({})",
                notification.id, notification.notification_type
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                NotificationResponse { notification },
                "Notification created successfully",
            )))
        }
        Err(e) => {
            error!("Failed to create notification: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::NotificationCreateFailed,
                    format!("Failed to create notification: {e}"),
                )),
            )
        }
    }
}
