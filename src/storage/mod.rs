use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::{
    PaginationQuery,
    notifications::{
        entities::{Notification, NotificationType},
        requests::CreateNotificationRequest,
        responses::NotificationListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 通知管理方法
    // 创建通知（id、时间戳由存储层分配，read_status 初始为 false）
    async fn create_notification(&self, req: CreateNotificationRequest) -> Result<Notification>;
    // 通过ID获取通知
    async fn get_notification_by_id(&self, id: i64) -> Result<Option<Notification>>;
    // 列出全部通知，按创建时间倒序，同一时刻按插入顺序
    async fn list_notifications(&self) -> Result<Vec<Notification>>;
    // 分页列出通知
    async fn list_notifications_with_pagination(
        &self,
        query: PaginationQuery,
    ) -> Result<NotificationListResponse>;
    // 列出未读通知
    async fn list_unread_notifications(&self) -> Result<Vec<Notification>>;
    // 按类别列出通知
    async fn list_notifications_by_type(
        &self,
        notification_type: NotificationType,
    ) -> Result<Vec<Notification>>;
    // 列出指定时间之后创建的通知（严格大于）
    async fn list_notifications_created_after(
        &self,
        after: DateTime<Utc>,
    ) -> Result<Vec<Notification>>;
    // 未读通知数量
    async fn count_unread_notifications(&self) -> Result<i64>;
    // 通知是否存在
    async fn notification_exists(&self, id: i64) -> Result<bool>;
    // 标记单条通知为已读（按 id 无条件更新，返回是否命中）
    async fn mark_notification_as_read(&self, id: i64) -> Result<bool>;
    // 标记全部未读通知为已读，返回更新条数
    async fn mark_all_notifications_as_read(&self) -> Result<i64>;
    // 删除通知，返回是否存在并被删除
    async fn delete_notification(&self, id: i64) -> Result<bool>;
    // 删除创建时间早于 cutoff 的通知（严格小于），返回删除条数
    async fn delete_notifications_older_than(&self, cutoff: DateTime<Utc>) -> Result<i64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
