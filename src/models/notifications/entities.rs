use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 通知类别（封闭集合，与触发事件一一对应）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub enum NotificationType {
    Appointment, // 预约相关
    Client,      // 客户相关
    Service,     // 理发服务相关
    System,      // 系统消息
}

impl NotificationType {
    pub const APPOINTMENT: &'static str = "APPOINTMENT";
    pub const CLIENT: &'static str = "CLIENT";
    pub const SERVICE: &'static str = "SERVICE";
    pub const SYSTEM: &'static str = "SYSTEM";
}

impl<'de> Deserialize<'de> for NotificationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            NotificationType::APPOINTMENT => Ok(NotificationType::Appointment),
            NotificationType::CLIENT => Ok(NotificationType::Client),
            NotificationType::SERVICE => Ok(NotificationType::Service),
            NotificationType::SYSTEM => Ok(NotificationType::System),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid notification type: '{s}'. Supported types: APPOINTMENT, CLIENT, SERVICE, SYSTEM"
            ))),
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::Appointment => write!(f, "{}", NotificationType::APPOINTMENT),
            NotificationType::Client => write!(f, "{}", NotificationType::CLIENT),
            NotificationType::Service => write!(f, "{}", NotificationType::SERVICE),
            NotificationType::System => write!(f, "{}", NotificationType::SYSTEM),
        }
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APPOINTMENT" => Ok(NotificationType::Appointment),
            "CLIENT" => Ok(NotificationType::Client),
            "SERVICE" => Ok(NotificationType::Service),
            "SYSTEM" => Ok(NotificationType::System),
            _ => Err(format!("Invalid notification type: {s}")),
        }
    }
}

// 通知业务实体
//
// read_status 为单向闭锁：创建时为 false，只能被标记为 true，没有回退操作。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub icon: String,
    pub action_url: Option<String>,
    pub read_status: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_notification_type_roundtrip() {
        for (s, t) in [
            ("APPOINTMENT", NotificationType::Appointment),
            ("CLIENT", NotificationType::Client),
            ("SERVICE", NotificationType::Service),
            ("SYSTEM", NotificationType::System),
        ] {
            assert_eq!(NotificationType::from_str(s).unwrap(), t);
            assert_eq!(t.to_string(), s);
        }
    }

    #[test]
    fn test_notification_type_rejects_unknown() {
        assert!(NotificationType::from_str("EMAIL").is_err());
        assert!(serde_json::from_str::<NotificationType>("\"email\"").is_err());
    }

    #[test]
    fn test_notification_type_deserialize() {
        let t: NotificationType = serde_json::from_str("\"CLIENT\"").unwrap();
        assert_eq!(t, NotificationType::Client);
    }
}
