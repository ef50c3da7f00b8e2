//! 领域事件便捷构造函数
//!
//! 客户、预约、服务项目等模块在自身写入成功后调用这些方法，
//! 把事件落成一条通知记录。模板文案定义在
//! `CreateNotificationRequest` 的关联构造函数中。

use std::sync::Arc;

use super::NotificationService;
use crate::errors::Result;
use crate::models::notifications::entities::Notification;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::storage::Storage;

impl NotificationService {
    // 新客户注册
    pub async fn notify_new_client(
        &self,
        storage: &Arc<dyn Storage>,
        client_name: &str,
    ) -> Result<Notification> {
        storage
            .create_notification(CreateNotificationRequest::new_client(client_name))
            .await
    }

    // 新预约
    pub async fn notify_new_appointment(
        &self,
        storage: &Arc<dyn Storage>,
        client_name: &str,
        barber_name: &str,
        time: &str,
    ) -> Result<Notification> {
        storage
            .create_notification(CreateNotificationRequest::new_appointment(
                client_name,
                barber_name,
                time,
            ))
            .await
    }

    // 预约取消
    pub async fn notify_appointment_cancelled(
        &self,
        storage: &Arc<dyn Storage>,
        client_name: &str,
        time: &str,
    ) -> Result<Notification> {
        storage
            .create_notification(CreateNotificationRequest::appointment_cancelled(
                client_name,
                time,
            ))
            .await
    }

    // 预约确认
    pub async fn notify_appointment_confirmed(
        &self,
        storage: &Arc<dyn Storage>,
        client_name: &str,
        time: &str,
    ) -> Result<Notification> {
        storage
            .create_notification(CreateNotificationRequest::appointment_confirmed(
                client_name,
                time,
            ))
            .await
    }

    // 新增服务项目
    pub async fn notify_new_service(
        &self,
        storage: &Arc<dyn Storage>,
        service_name: &str,
    ) -> Result<Notification> {
        storage
            .create_notification(CreateNotificationRequest::new_service(service_name))
            .await
    }

    // 服务项目更新
    pub async fn notify_service_updated(
        &self,
        storage: &Arc<dyn Storage>,
        service_name: &str,
    ) -> Result<Notification> {
        storage
            .create_notification(CreateNotificationRequest::service_updated(service_name))
            .await
    }

    // 系统消息
    pub async fn notify_system_message(
        &self,
        storage: &Arc<dyn Storage>,
        title: &str,
        message: &str,
    ) -> Result<Notification> {
        storage
            .create_notification(CreateNotificationRequest::system_message(title, message))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notifications::entities::NotificationType;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn storage() -> Arc<dyn Storage> {
        Arc::new(
            SeaOrmStorage::new_with_options(":memory:", 1, 5)
                .await
                .expect("in-memory sqlite storage"),
        )
    }

    #[tokio::test]
    async fn test_notify_new_appointment_persists() {
        let storage = storage().await;
        let service = NotificationService::new_lazy();

        let notification = service
            .notify_new_appointment(&storage, "Alice", "Bob", "14:30")
            .await
            .unwrap();

        assert_eq!(
            notification.notification_type,
            NotificationType::Appointment
        );
        assert_eq!(notification.title, "New Appointment");
        assert_eq!(
            notification.message,
            "Alice booked an appointment with Bob at 14:30"
        );
        assert_eq!(notification.icon, "event");
        assert!(!notification.read_status);

        let reloaded = storage
            .get_notification_by_id(notification.id)
            .await
            .unwrap();
        assert!(reloaded.is_some());
    }

    #[tokio::test]
    async fn test_notify_system_message_uses_caller_copy() {
        let storage = storage().await;
        let service = NotificationService::new_lazy();

        let notification = service
            .notify_system_message(&storage, "Maintenance", "Back at 18:00")
            .await
            .unwrap();

        assert_eq!(notification.notification_type, NotificationType::System);
        assert_eq!(notification.title, "Maintenance");
        assert_eq!(notification.message, "Back at 18:00");
        assert_eq!(notification.icon, "info");
        assert_eq!(storage.count_unread_notifications().await.unwrap(), 1);
    }
}
