//! Notification sink for user-facing notices.

use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(text) | Notice::Error(text) => text,
        }
    }
}

/// Receives the notices produced by the API client.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);

    fn success(&self, message: &str) {
        self.notify(Notice::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notify(Notice::Error(message.to_string()));
    }
}

/// Writes notices to the tracing subscriber. Used by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: Notice) {
        match notice {
            Notice::Success(text) => tracing::info!(notice = %text, "✅ Success"),
            Notice::Error(text) => tracing::warn!(notice = %text, "❌ Error"),
        }
    }
}

/// Forwards notices to a UI task over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notice>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notice>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notice: Notice) {
        if self.tx.send(notice).is_err() {
            tracing::debug!("Notice dropped, receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_notifier_delivers_in_order() {
        let (notifier, mut rx) = ChannelNotifier::new();
        notifier.success("Transfer successful");
        notifier.error("Access denied");

        assert_eq!(
            rx.try_recv().unwrap(),
            Notice::Success("Transfer successful".to_string())
        );
        assert_eq!(rx.try_recv().unwrap(), Notice::Error("Access denied".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn channel_notifier_survives_closed_receiver() {
        let (notifier, rx) = ChannelNotifier::new();
        drop(rx);
        notifier.error("nobody listening");
    }

    #[test]
    fn notice_text() {
        assert_eq!(Notice::Error("boom".to_string()).text(), "boom");
    }
}
