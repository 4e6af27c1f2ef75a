use super::channel::{NotificationChannel, Subscription};
use super::error::Error;
use super::models::{DisplayState, ToastConfig, Visibility};
use dioxus::logger::tracing::debug;

/// Renderer-independent driver for a toast: binds a [`DisplayState`] to a
/// notification channel for hosts that are not Dioxus, or that want to
/// pump notifications themselves. The `Toast` component composes the same
/// `Subscription` and `DisplayState::receive` inside its own scope.
///
/// The subscription lives exactly as long as the widget does, or until
/// [`ToastWidget::teardown`].
pub struct ToastWidget {
    channel: NotificationChannel,
    subscription: Option<Subscription>,
    state: DisplayState,
}

impl ToastWidget {
    pub fn new(channel: NotificationChannel, config: ToastConfig) -> Self {
        Self {
            channel,
            subscription: None,
            state: DisplayState::new(&config),
        }
    }

    pub fn initialize(&mut self) -> Result<(), Error> {
        if self.subscription.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        self.subscription = Some(self.channel.subscribe());
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.subscription.is_some()
    }

    /// Replaces the bound channel. A live subscription moves to the new
    /// channel; otherwise the next `initialize` picks it up.
    pub fn set_channel(&mut self, channel: NotificationChannel) {
        if channel == self.channel {
            return;
        }
        self.channel = channel;
        if self.subscription.is_some() {
            debug!("Rebinding toast to a new notification channel");
            self.subscription = Some(self.channel.subscribe());
        }
    }

    pub fn channel(&self) -> &NotificationChannel {
        &self.channel
    }

    /// Applies every queued notification. Returns how many were taken off
    /// the channel, including rejected ones.
    pub fn pump(&mut self) -> Result<usize, Error> {
        let subscription = self.subscription.as_ref().ok_or(Error::NotInitialized)?;
        let mut received = 0;
        while let Some(raw) = subscription.try_next() {
            received += 1;
            let _ = self.state.receive(raw);
        }
        Ok(received)
    }

    /// Waits for one notification and applies it. A malformed notification
    /// is reported back while the display state stays as it was.
    pub async fn recv(&mut self) -> Result<(), Error> {
        let subscription = self.subscription.as_ref().ok_or(Error::NotInitialized)?;
        let raw = subscription.next().await.ok_or(Error::ChannelClosed)?;
        self.state.receive(raw)
    }

    pub fn dismiss(&mut self) {
        self.state.dismiss();
    }

    pub fn teardown(&mut self) {
        self.subscription = None;
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn visibility(&self) -> Visibility {
        self.state.visibility()
    }

    pub fn glyph(&self) -> &'static str {
        self.state.glyph()
    }
}
