//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{BarbershopError, Result};
use crate::models::{
    PaginationInfo, PaginationQuery,
    notifications::{
        entities::{Notification, NotificationType},
        requests::CreateNotificationRequest,
        responses::NotificationListResponse,
    },
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建通知
    ///
    /// read_status 初始为 false，created_at 与 updated_at 同为当前时刻。
    pub async fn create_notification_impl(
        &self,
        req: CreateNotificationRequest,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            notification_type: Set(req.notification_type.to_string()),
            title: Set(req.title),
            message: Set(req.message),
            icon: Set(req.icon),
            action_url: Set(req.action_url),
            read_status: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| BarbershopError::database_operation(format!("创建通知失败: {e}")))?;

        Ok(result.into_notification())
    }

    /// 通过 ID 获取通知
    pub async fn get_notification_by_id_impl(
        &self,
        notification_id: i64,
    ) -> Result<Option<Notification>> {
        let result = Notifications::find_by_id(notification_id)
            .one(&self.db)
            .await
            .map_err(|e| BarbershopError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(result.map(|m| m.into_notification()))
    }

    /// 列出全部通知
    ///
    /// 按创建时间倒序；同一时刻的记录按插入顺序（即 id 升序）。
    pub async fn list_notifications_impl(&self) -> Result<Vec<Notification>> {
        let results = Notifications::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| BarbershopError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_notification()).collect())
    }

    /// 分页列出通知
    pub async fn list_notifications_with_pagination_impl(
        &self,
        query: PaginationQuery,
    ) -> Result<NotificationListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let select = Notifications::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| BarbershopError::database_operation(format!("查询通知总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| BarbershopError::database_operation(format!("查询通知页数失败: {e}")))?;

        let notifications = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| BarbershopError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(NotificationListResponse {
            items: notifications
                .into_iter()
                .map(|m| m.into_notification())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出未读通知
    pub async fn list_unread_notifications_impl(&self) -> Result<Vec<Notification>> {
        let results = Notifications::find()
            .filter(Column::ReadStatus.eq(false))
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                BarbershopError::database_operation(format!("查询未读通知列表失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_notification()).collect())
    }

    /// 按类别列出通知
    pub async fn list_notifications_by_type_impl(
        &self,
        notification_type: NotificationType,
    ) -> Result<Vec<Notification>> {
        let results = Notifications::find()
            .filter(Column::NotificationType.eq(notification_type.to_string()))
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                BarbershopError::database_operation(format!("按类别查询通知失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_notification()).collect())
    }

    /// 列出指定时间之后创建的通知（严格大于）
    pub async fn list_notifications_created_after_impl(
        &self,
        after: DateTime<Utc>,
    ) -> Result<Vec<Notification>> {
        let results = Notifications::find()
            .filter(Column::CreatedAt.gt(after.timestamp()))
            .order_by_desc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                BarbershopError::database_operation(format!("按时间查询通知失败: {e}"))
            })?;

        Ok(results.into_iter().map(|m| m.into_notification()).collect())
    }

    /// 获取未读通知数量
    pub async fn count_unread_notifications_impl(&self) -> Result<i64> {
        let count = Notifications::find()
            .filter(Column::ReadStatus.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| {
                BarbershopError::database_operation(format!("查询未读通知数量失败: {e}"))
            })?;

        Ok(count as i64)
    }

    /// 判断通知是否存在
    pub async fn notification_exists_impl(&self, notification_id: i64) -> Result<bool> {
        let count = Notifications::find()
            .filter(Column::Id.eq(notification_id))
            .count(&self.db)
            .await
            .map_err(|e| BarbershopError::database_operation(format!("查询通知失败: {e}")))?;

        Ok(count > 0)
    }

    /// 标记通知为已读
    ///
    /// 按 id 无条件更新（已读记录再次标记仍计为命中），同时刷新 updated_at。
    pub async fn mark_notification_as_read_impl(&self, notification_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Notifications::update_many()
            .col_expr(Column::ReadStatus, sea_orm::sea_query::Expr::value(true))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(notification_id))
            .exec(&self.db)
            .await
            .map_err(|e| BarbershopError::database_operation(format!("标记通知已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 标记全部未读通知为已读
    ///
    /// 单条原子语句，只触及 read_status = false 的记录，已读记录的 updated_at 不变。
    pub async fn mark_all_notifications_as_read_impl(&self) -> Result<i64> {
        let now = chrono::Utc::now().timestamp();

        let result = Notifications::update_many()
            .col_expr(Column::ReadStatus, sea_orm::sea_query::Expr::value(true))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::ReadStatus.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| {
                BarbershopError::database_operation(format!("标记全部通知已读失败: {e}"))
            })?;

        Ok(result.rows_affected as i64)
    }

    /// 删除通知
    pub async fn delete_notification_impl(&self, notification_id: i64) -> Result<bool> {
        let result = Notifications::delete_by_id(notification_id)
            .exec(&self.db)
            .await
            .map_err(|e| BarbershopError::database_operation(format!("删除通知失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除创建时间早于 cutoff 的通知（严格小于，单条原子语句）
    pub async fn delete_notifications_older_than_impl(&self, cutoff: DateTime<Utc>) -> Result<i64> {
        let result = Notifications::delete_many()
            .filter(Column::CreatedAt.lt(cutoff.timestamp()))
            .exec(&self.db)
            .await
            .map_err(|e| BarbershopError::database_operation(format!("清理过期通知失败: {e}")))?;

        Ok(result.rows_affected as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    async fn storage() -> SeaOrmStorage {
        SeaOrmStorage::new_with_options(":memory:", 1, 5)
            .await
            .expect("in-memory sqlite storage")
    }

    // 直接写入指定时间戳的记录，绕过 create 的 now() 以便测试排序与清理
    async fn insert_at(storage: &SeaOrmStorage, title: &str, created_at: i64, read: bool) -> i64 {
        let model = ActiveModel {
            notification_type: Set(NotificationType::System.to_string()),
            title: Set(title.to_string()),
            message: Set(format!("{title} body")),
            icon: Set("info".to_string()),
            action_url: Set(None),
            read_status: Set(read),
            created_at: Set(created_at),
            updated_at: Set(created_at),
            ..Default::default()
        };
        model.insert(&storage.db).await.expect("insert").id
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_sets_defaults() {
        let storage = storage().await;
        let req = CreateNotificationRequest::new_client("Alice");

        let notification = storage.create_notification_impl(req).await.unwrap();

        assert_eq!(notification.notification_type, NotificationType::Client);
        assert_eq!(notification.title, "New Client");
        assert_eq!(notification.message, "Alice was registered in the system");
        assert_eq!(notification.icon, "person_add");
        assert!(notification.action_url.is_none());
        assert!(!notification.read_status);
        assert_eq!(notification.created_at, notification.updated_at);
    }

    #[tokio::test]
    async fn test_get_by_id_absent_returns_none() {
        let storage = storage().await;
        assert!(
            storage
                .get_notification_by_id_impl(4242)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_list_sorted_desc_with_stable_ties() {
        let storage = storage().await;
        // 乱序插入，其中两条创建时间相同
        insert_at(&storage, "first", 100, false).await;
        insert_at(&storage, "third", 300, false).await;
        insert_at(&storage, "second-a", 200, false).await;
        insert_at(&storage, "second-b", 200, false).await;

        let titles: Vec<String> = storage
            .list_notifications_impl()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();

        assert_eq!(titles, ["third", "second-a", "second-b", "first"]);
    }

    #[tokio::test]
    async fn test_unread_filter_and_count() {
        let storage = storage().await;
        insert_at(&storage, "unread-new", 200, false).await;
        insert_at(&storage, "read", 150, true).await;
        insert_at(&storage, "unread-old", 100, false).await;

        let unread = storage.list_unread_notifications_impl().await.unwrap();
        let titles: Vec<&str> = unread.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["unread-new", "unread-old"]);
        assert_eq!(storage.count_unread_notifications_impl().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_by_type() {
        let storage = storage().await;
        storage
            .create_notification_impl(CreateNotificationRequest::new_client("Alice"))
            .await
            .unwrap();
        storage
            .create_notification_impl(CreateNotificationRequest::new_service("Haircut"))
            .await
            .unwrap();

        let clients = storage
            .list_notifications_by_type_impl(NotificationType::Client)
            .await
            .unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].title, "New Client");

        let appointments = storage
            .list_notifications_by_type_impl(NotificationType::Appointment)
            .await
            .unwrap();
        assert!(appointments.is_empty());
    }

    #[tokio::test]
    async fn test_created_after_is_strict() {
        let storage = storage().await;
        insert_at(&storage, "old", 100, false).await;
        insert_at(&storage, "boundary", 200, false).await;
        insert_at(&storage, "new", 300, false).await;

        let after = storage
            .list_notifications_created_after_impl(at(200))
            .await
            .unwrap();
        let titles: Vec<&str> = after.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["new"]);
    }

    #[tokio::test]
    async fn test_mark_as_read_unconditional() {
        let storage = storage().await;
        let notification = storage
            .create_notification_impl(CreateNotificationRequest::system_message("Hi", "body"))
            .await
            .unwrap();

        assert!(
            storage
                .mark_notification_as_read_impl(notification.id)
                .await
                .unwrap()
        );
        let reloaded = storage
            .get_notification_by_id_impl(notification.id)
            .await
            .unwrap()
            .unwrap();
        assert!(reloaded.read_status);
        assert!(reloaded.updated_at >= reloaded.created_at);

        // 已读记录再次标记：按 id 无条件更新，仍计为命中
        assert!(
            storage
                .mark_notification_as_read_impl(notification.id)
                .await
                .unwrap()
        );
        let reloaded = storage
            .get_notification_by_id_impl(notification.id)
            .await
            .unwrap()
            .unwrap();
        assert!(reloaded.read_status);
    }

    #[tokio::test]
    async fn test_mark_as_read_absent_returns_false() {
        let storage = storage().await;
        assert!(!storage.mark_notification_as_read_impl(4242).await.unwrap());
    }

    #[tokio::test]
    async fn test_mark_all_only_touches_unread() {
        let storage = storage().await;
        insert_at(&storage, "unread-1", 100, false).await;
        insert_at(&storage, "unread-2", 200, false).await;
        let read_id = insert_at(&storage, "already-read", 50, true).await;

        let marked = storage.mark_all_notifications_as_read_impl().await.unwrap();
        assert_eq!(marked, 2);
        assert_eq!(storage.count_unread_notifications_impl().await.unwrap(), 0);

        // 已读记录的 updated_at 不受影响
        let untouched = storage
            .get_notification_by_id_impl(read_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(untouched.updated_at.timestamp(), 50);

        // 再次执行：没有未读记录，更新 0 条
        assert_eq!(
            storage.mark_all_notifications_as_read_impl().await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_delete_notification() {
        let storage = storage().await;
        let notification = storage
            .create_notification_impl(CreateNotificationRequest::new_client("Alice"))
            .await
            .unwrap();

        assert!(storage.notification_exists_impl(notification.id).await.unwrap());
        assert!(storage.delete_notification_impl(notification.id).await.unwrap());
        assert!(!storage.notification_exists_impl(notification.id).await.unwrap());

        // 删除不存在的记录返回 false 而非错误
        assert!(!storage.delete_notification_impl(notification.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_older_than_strict_boundary() {
        let storage = storage().await;
        insert_at(&storage, "expired", 100, false).await;
        insert_at(&storage, "boundary", 200, false).await;
        insert_at(&storage, "fresh", 300, false).await;

        let deleted = storage
            .delete_notifications_older_than_impl(at(200))
            .await
            .unwrap();
        assert_eq!(deleted, 1);

        let titles: Vec<String> = storage
            .list_notifications_impl()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        // 恰好等于 cutoff 的记录保留
        assert_eq!(titles, ["fresh", "boundary"]);
    }

    #[tokio::test]
    async fn test_pagination() {
        let storage = storage().await;
        for i in 0..25 {
            insert_at(&storage, &format!("n-{i}"), 1000 + i, false).await;
        }

        let page = storage
            .list_notifications_with_pagination_impl(PaginationQuery { page: 2, size: 10 })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.page_size, 10);
        assert_eq!(page.pagination.total, 25);
        assert_eq!(page.pagination.total_pages, 3);
        // 第二页第一条是全局第 11 新的记录
        assert_eq!(page.items[0].title, "n-14");
    }

    #[tokio::test]
    async fn test_unread_count_follows_lifecycle() {
        let storage = storage().await;
        let before = storage.count_unread_notifications_impl().await.unwrap();

        let notification = storage
            .create_notification_impl(CreateNotificationRequest::new_client("Alice"))
            .await
            .unwrap();
        assert_eq!(
            storage.count_unread_notifications_impl().await.unwrap(),
            before + 1
        );

        storage
            .mark_notification_as_read_impl(notification.id)
            .await
            .unwrap();
        assert_eq!(
            storage.count_unread_notifications_impl().await.unwrap(),
            before
        );
        assert!(
            storage
                .get_notification_by_id_impl(notification.id)
                .await
                .unwrap()
                .unwrap()
                .read_status
        );
    }
}
