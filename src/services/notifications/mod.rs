pub mod cleanup;
pub mod count;
pub mod create;
pub mod delete;
pub mod events;
pub mod get;
pub mod list;
pub mod page;
pub mod read;
pub mod read_all;
pub mod unread;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::PaginationQuery;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::storage::Storage;

/// 通知业务服务
///
/// 通知的构造与变更只允许经过本服务；其它领域模块（客户、预约、服务项目）
/// 通过 events 中的便捷构造函数产生通知。
pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取通知列表
    pub async fn list_notifications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_notifications(self, request).await
    }

    // 分页获取通知列表
    pub async fn list_notifications_page(
        &self,
        query: PaginationQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        page::list_notifications_page(self, query, request).await
    }

    // 获取未读通知列表
    pub async fn list_unread_notifications(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        unread::list_unread_notifications(self, request).await
    }

    // 获取未读通知数量
    pub async fn get_unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        count::get_unread_count(self, request).await
    }

    // 根据ID获取通知
    pub async fn get_notification(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_notification(self, notification_id, request).await
    }

    // 创建通知
    pub async fn create_notification(
        &self,
        notification_data: CreateNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_notification(self, notification_data, request).await
    }

    // 标记通知为已读
    pub async fn mark_as_read(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        read::mark_as_read(self, notification_id, request).await
    }

    // 标记全部通知为已读
    pub async fn mark_all_as_read(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        read_all::mark_all_as_read(self, request).await
    }

    // 删除通知
    pub async fn delete_notification(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notification(self, notification_id, request).await
    }

    // 清理过期通知
    pub async fn cleanup_notifications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        cleanup::cleanup_notifications(self, request).await
    }
}
