#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownIconKey(String),
    MalformedEvent(String),
    AlreadyInitialized,
    NotInitialized,
    ChannelClosed,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownIconKey(key) => write!(f, "Unknown icon key: {}", key),
            Error::MalformedEvent(msg) => write!(f, "Malformed notification: {}", msg),
            Error::AlreadyInitialized => write!(f, "Toast widget is already initialized"),
            Error::NotInitialized => write!(f, "Toast widget is not initialized"),
            Error::ChannelClosed => write!(f, "Notification channel closed"),
        }
    }
}

impl std::error::Error for Error {}
