use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::NotificationService;
use crate::config::AppConfig;
use crate::models::notifications::responses::CleanupResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn cleanup_notifications(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let retention_days = AppConfig::get().notification.retention_days;
    let cutoff = chrono::Utc::now() - chrono::Duration::days(retention_days);

    match storage.delete_notifications_older_than(cutoff).await {
        Ok(count) => {
            info!(
                "Cleaned up {} notification(s) older than {} day(s)",
                count, retention_days
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CleanupResponse {
                    deleted_count: count,
                },
                "Old notifications cleaned up successfully",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to clean up old notifications: {e}"),
            )),
        ),
    }
}
