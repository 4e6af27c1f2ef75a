pub mod channel;
pub mod error;
pub mod icons;
pub mod models;
pub mod widget;

pub use channel::{NotificationChannel, Subscription};
pub use error::Error;
pub use icons::{ICONS, IconCatalog, resolve_icon};
pub use models::{DisplayState, NotificationEvent, RawNotification, ToastConfig, Visibility};
pub use widget::ToastWidget;
