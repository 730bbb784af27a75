use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::info;

use crate::application::ports::AlertNotifier;
use crate::shared::error::AppError;

/// UI シェルへ通知文言を流すチャネル。受信側がダイアログ表示を担当する
#[derive(Clone)]
pub struct ChannelAlertNotifier {
    sender: UnboundedSender<String>,
}

impl ChannelAlertNotifier {
    pub fn new() -> (Self, UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl AlertNotifier for ChannelAlertNotifier {
    async fn alert(&self, message: &str) -> Result<(), AppError> {
        info!(message, "alert raised");
        self.sender
            .send(message.to_string())
            .map_err(|_| AppError::Internal("alert receiver dropped".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn alerts_reach_the_receiver_in_order() {
        let (notifier, mut receiver) = ChannelAlertNotifier::new();
        notifier.alert("first").await.unwrap();
        notifier.alert("second").await.unwrap();

        assert_eq!(receiver.recv().await.as_deref(), Some("first"));
        assert_eq!(receiver.recv().await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn dropped_receiver_is_an_error() {
        let (notifier, receiver) = ChannelAlertNotifier::new();
        drop(receiver);
        assert!(notifier.alert("lost").await.is_err());
    }
}
