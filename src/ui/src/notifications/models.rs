use super::error::Error;
use super::icons::ICONS;
use dioxus::logger::tracing::warn;
use serde::{Deserialize, Serialize};

/// A notification as pushed by the host. Fields are optional so that
/// incomplete records can travel the channel and be rejected on arrival.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNotification {
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RawNotification {
    pub fn new(icon: &str, message: &str) -> Self {
        Self {
            icon: Some(icon.to_string()),
            message: Some(message.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub icon: String,
    pub message: String,
}

impl NotificationEvent {
    pub fn new(icon: &str, message: &str) -> Self {
        Self {
            icon: icon.to_string(),
            message: message.to_string(),
        }
    }

    pub fn success(message: &str) -> Self {
        Self::new("check", message)
    }

    pub fn failure(message: &str) -> Self {
        Self::new("error", message)
    }

    pub fn warning(message: &str) -> Self {
        Self::new("warning", message)
    }
}

impl TryFrom<RawNotification> for NotificationEvent {
    type Error = Error;

    fn try_from(raw: RawNotification) -> Result<Self, Self::Error> {
        let icon = match raw.icon {
            Some(icon) if !icon.is_empty() => icon,
            Some(_) => return Err(Error::MalformedEvent("empty icon".to_string())),
            None => return Err(Error::MalformedEvent("missing icon".to_string())),
        };
        let message = raw
            .message
            .ok_or_else(|| Error::MalformedEvent("missing message".to_string()))?;

        Ok(Self { icon, message })
    }
}

impl From<NotificationEvent> for RawNotification {
    fn from(event: NotificationEvent) -> Self {
        Self {
            icon: Some(event.icon),
            message: Some(event.message),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Whether a fresh toast is visible before its first notification.
    pub initially_opened: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            initially_opened: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayState {
    pub opened: bool,
    pub icon: String,
    pub message: String,
}

impl DisplayState {
    pub fn new(config: &ToastConfig) -> Self {
        Self {
            opened: config.initially_opened,
            icon: String::new(),
            message: String::new(),
        }
    }

    /// Overwrites the shown notification and reopens the toast.
    pub fn apply(&mut self, event: NotificationEvent) {
        self.icon = event.icon;
        self.message = event.message;
        self.opened = true;
    }

    /// Validates and applies a notification off the channel. A rejected
    /// notification leaves the current state as it was.
    pub fn receive(&mut self, raw: RawNotification) -> Result<(), Error> {
        match NotificationEvent::try_from(raw) {
            Ok(event) => {
                self.apply(event);
                Ok(())
            }
            Err(e) => {
                warn!("Dropping notification: {}", e);
                Err(e)
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.opened = false;
    }

    pub fn visibility(&self) -> Visibility {
        if self.opened {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    pub fn glyph(&self) -> &'static str {
        ICONS.resolve(&self.icon)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(&ToastConfig::default())
    }
}
