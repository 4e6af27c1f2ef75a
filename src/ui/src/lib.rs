//! Notification toast widget and the channel that feeds it.

pub mod components;
pub mod notifications;

pub use components::toast::Toast;
pub use notifications::{NotificationChannel, NotificationEvent, RawNotification, ToastConfig};
