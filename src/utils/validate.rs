use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::notifications::requests::CreateNotificationRequest;

// 跳转链接：站内相对路径或 http(s) 绝对地址
static ACTION_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://\S+|/\S*)$").expect("Invalid action url regex"));

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Title is required");
    }
    // 标题长度上限与数据库列定义一致
    if title.len() > 255 {
        return Err("Title must be at most 255 characters");
    }
    Ok(())
}

pub fn validate_message(message: &str) -> Result<(), &'static str> {
    if message.trim().is_empty() {
        return Err("Message is required");
    }
    Ok(())
}

pub fn validate_icon(icon: &str) -> Result<(), &'static str> {
    if icon.trim().is_empty() {
        return Err("Icon is required");
    }
    if icon.len() > 50 {
        return Err("Icon must be at most 50 characters");
    }
    Ok(())
}

pub fn validate_action_url(action_url: &str) -> Result<(), &'static str> {
    if action_url.len() > 500 {
        return Err("Action URL must be at most 500 characters");
    }
    if !ACTION_URL_RE.is_match(action_url) {
        return Err("Action URL must be an absolute http(s) URL or a site-relative path");
    }
    Ok(())
}

/// 校验创建通知请求（必填字段与长度上限）
pub fn validate_create_notification(req: &CreateNotificationRequest) -> Result<(), &'static str> {
    validate_title(&req.title)?;
    validate_message(&req.message)?;
    validate_icon(&req.icon)?;
    if let Some(action_url) = &req.action_url {
        validate_action_url(action_url)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_required_and_bounded() {
        assert!(validate_title("New Client").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"x".repeat(256)).is_err());
        assert!(validate_title(&"x".repeat(255)).is_ok());
    }

    #[test]
    fn test_message_required() {
        assert!(validate_message("Alice was registered in the system").is_ok());
        assert!(validate_message("").is_err());
    }

    #[test]
    fn test_icon_required_and_bounded() {
        assert!(validate_icon("person_add").is_ok());
        assert!(validate_icon("").is_err());
        assert!(validate_icon(&"x".repeat(51)).is_err());
    }

    #[test]
    fn test_action_url_shape() {
        assert!(validate_action_url("/appointments/42").is_ok());
        assert!(validate_action_url("https://example.com/x").is_ok());
        assert!(validate_action_url("ftp://example.com").is_err());
        assert!(validate_action_url("not a url").is_err());
        assert!(validate_action_url(&format!("/{}", "x".repeat(500))).is_err());
    }

    #[test]
    fn test_create_request_validation() {
        let ok = CreateNotificationRequest::new_client("Alice");
        assert!(validate_create_notification(&ok).is_ok());

        let mut bad = CreateNotificationRequest::new_client("Alice");
        bad.title = String::new();
        assert!(validate_create_notification(&bad).is_err());

        let bad_url = CreateNotificationRequest::new_client("Alice").with_action_url("nope");
        assert!(validate_create_notification(&bad_url).is_err());
    }
}
