pub mod notifications;

pub use notifications::configure_notification_routes;
