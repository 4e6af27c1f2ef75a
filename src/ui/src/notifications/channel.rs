use super::models::RawNotification;
use flume::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Push-based broadcast stream of notifications shared between the host
/// and any number of toasts. Clones refer to the same channel.
#[derive(Clone, Default)]
pub struct NotificationChannel {
    inner: Arc<Mutex<ChannelInner>>,
}

#[derive(Default)]
struct ChannelInner {
    subscribers: Vec<Sender<RawNotification>>,
    closed: bool,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ChannelInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Only notifications pushed after this call are delivered.
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = flume::unbounded::<RawNotification>();
        let mut inner = self.lock();
        if !inner.closed {
            inner.subscribers.push(tx);
        }
        Subscription { receiver: rx }
    }

    /// Delivers to every live subscriber and returns how many it reached.
    pub fn push(&self, notification: impl Into<RawNotification>) -> usize {
        let notification = notification.into();
        let mut inner = self.lock();
        if inner.closed {
            return 0;
        }
        inner
            .subscribers
            .retain(|tx| tx.send(notification.clone()).is_ok());
        inner.subscribers.len()
    }

    pub fn close(&self) {
        let mut inner = self.lock();
        inner.closed = true;
        inner.subscribers.clear();
    }

    pub fn subscriber_count(&self) -> usize {
        let mut inner = self.lock();
        inner.subscribers.retain(|tx| !tx.is_disconnected());
        inner.subscribers.len()
    }
}

impl PartialEq for NotificationChannel {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for NotificationChannel {}

impl std::fmt::Debug for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("NotificationChannel")
            .field("subscribers", &inner.subscribers.len())
            .field("closed", &inner.closed)
            .finish()
    }
}

/// A listener on a [`NotificationChannel`]. Dropping it unsubscribes.
#[derive(Debug)]
pub struct Subscription {
    receiver: Receiver<RawNotification>,
}

impl Subscription {
    /// Waits for the next notification. `None` once the channel is closed
    /// and everything queued before closing has been taken.
    pub async fn next(&self) -> Option<RawNotification> {
        self.receiver.recv_async().await.ok()
    }

    pub fn try_next(&self) -> Option<RawNotification> {
        self.receiver.try_recv().ok()
    }
}
