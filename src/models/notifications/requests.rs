use serde::Deserialize;
use ts_rs::TS;

use super::entities::NotificationType;

/// 创建通知请求
///
/// 事件便捷构造函数把各领域事件映射为固定的 类别/标题/图标 模板，
/// 正文由调用方提供的参数插值得到。客户端/预约/服务模块只调用这些
/// 构造函数，不直接拼装通知内容。
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct CreateNotificationRequest {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub icon: String,
    #[serde(default)]
    pub action_url: Option<String>,
}

impl CreateNotificationRequest {
    // 新客户注册
    pub fn new_client(client_name: &str) -> Self {
        Self {
            notification_type: NotificationType::Client,
            title: "New Client".to_string(),
            message: format!("{client_name} was registered in the system"),
            icon: "person_add".to_string(),
            action_url: None,
        }
    }

    // 新预约
    pub fn new_appointment(client_name: &str, barber_name: &str, time: &str) -> Self {
        Self {
            notification_type: NotificationType::Appointment,
            title: "New Appointment".to_string(),
            message: format!("{client_name} booked an appointment with {barber_name} at {time}"),
            icon: "event".to_string(),
            action_url: None,
        }
    }

    // 预约取消
    pub fn appointment_cancelled(client_name: &str, time: &str) -> Self {
        Self {
            notification_type: NotificationType::Appointment,
            title: "Appointment Cancelled".to_string(),
            message: format!("{client_name}'s appointment at {time} was cancelled"),
            icon: "event_busy".to_string(),
            action_url: None,
        }
    }

    // 预约确认
    pub fn appointment_confirmed(client_name: &str, time: &str) -> Self {
        Self {
            notification_type: NotificationType::Appointment,
            title: "Appointment Confirmed".to_string(),
            message: format!("{client_name} confirmed the appointment at {time}"),
            icon: "event_available".to_string(),
            action_url: None,
        }
    }

    // 新增服务项目
    pub fn new_service(service_name: &str) -> Self {
        Self {
            notification_type: NotificationType::Service,
            title: "New Service".to_string(),
            message: format!("{service_name} was added to the services"),
            icon: "build".to_string(),
            action_url: None,
        }
    }

    // 服务项目更新
    pub fn service_updated(service_name: &str) -> Self {
        Self {
            notification_type: NotificationType::Service,
            title: "Service Updated".to_string(),
            message: format!("{service_name} was updated"),
            icon: "edit".to_string(),
            action_url: None,
        }
    }

    // 系统消息：标题与正文由调用方提供
    pub fn system_message(title: &str, message: &str) -> Self {
        Self {
            notification_type: NotificationType::System,
            title: title.to_string(),
            message: message.to_string(),
            icon: "info".to_string(),
            action_url: None,
        }
    }

    pub fn with_action_url(mut self, action_url: impl Into<String>) -> Self {
        self.action_url = Some(action_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_template() {
        let req = CreateNotificationRequest::new_client("Alice");
        assert_eq!(req.notification_type, NotificationType::Client);
        assert_eq!(req.title, "New Client");
        assert_eq!(req.message, "Alice was registered in the system");
        assert_eq!(req.icon, "person_add");
        assert!(req.action_url.is_none());
    }

    #[test]
    fn test_new_appointment_template() {
        let req = CreateNotificationRequest::new_appointment("Alice", "Bob", "14:30");
        assert_eq!(req.notification_type, NotificationType::Appointment);
        assert_eq!(req.title, "New Appointment");
        assert_eq!(req.message, "Alice booked an appointment with Bob at 14:30");
        assert_eq!(req.icon, "event");
    }

    #[test]
    fn test_appointment_cancelled_template() {
        let req = CreateNotificationRequest::appointment_cancelled("Alice", "14:30");
        assert_eq!(req.notification_type, NotificationType::Appointment);
        assert_eq!(req.title, "Appointment Cancelled");
        assert_eq!(req.message, "Alice's appointment at 14:30 was cancelled");
        assert_eq!(req.icon, "event_busy");
    }

    #[test]
    fn test_appointment_confirmed_template() {
        let req = CreateNotificationRequest::appointment_confirmed("Alice", "14:30");
        assert_eq!(req.title, "Appointment Confirmed");
        assert_eq!(req.message, "Alice confirmed the appointment at 14:30");
        assert_eq!(req.icon, "event_available");
    }

    #[test]
    fn test_service_templates() {
        let req = CreateNotificationRequest::new_service("Haircut");
        assert_eq!(req.notification_type, NotificationType::Service);
        assert_eq!(req.title, "New Service");
        assert_eq!(req.message, "Haircut was added to the services");
        assert_eq!(req.icon, "build");

        let req = CreateNotificationRequest::service_updated("Haircut");
        assert_eq!(req.title, "Service Updated");
        assert_eq!(req.message, "Haircut was updated");
        assert_eq!(req.icon, "edit");
    }

    #[test]
    fn test_system_message_template() {
        let req = CreateNotificationRequest::system_message("Maintenance", "Back at 18:00");
        assert_eq!(req.notification_type, NotificationType::System);
        assert_eq!(req.title, "Maintenance");
        assert_eq!(req.message, "Back at 18:00");
        assert_eq!(req.icon, "info");
    }

    #[test]
    fn test_with_action_url() {
        let req = CreateNotificationRequest::new_client("Alice").with_action_url("/clients/42");
        assert_eq!(req.action_url.as_deref(), Some("/clients/42"));
    }

    #[test]
    fn test_deserialize_type_field() {
        let req: CreateNotificationRequest = serde_json::from_str(
            r#"{"type":"CLIENT","title":"New Client","message":"Alice was registered in the system","icon":"person_add"}"#,
        )
        .unwrap();
        assert_eq!(req.notification_type, NotificationType::Client);
        assert!(req.action_url.is_none());
    }
}
