use super::HandlerError;
use crate::models::{ChatMessagePayload, Notification, CHAT_MESSAGE};
use async_trait::async_trait;
use serde::Serialize;
use tracing::Instrument;

/// What a notification dispatch ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    Handled,
    /// The message came from the seller side and is not reacted to.
    SupplySenderSkipped,
    /// The provider sent a type nobody routes; tolerated on purpose.
    TypeIgnored,
}

/// Entry point for notifications pushed by the chat provider.
#[async_trait]
pub trait NotificationHandler: Send + Sync {
    async fn handle(&self, notification: &Notification) -> Result<DispatchOutcome, HandlerError>;
}

/// Reaction to buyer chat messages.
///
/// Every implementor is a [`NotificationHandler`]: `CHAT_MESSAGE`
/// notifications from the demand side reach [`handle_chat_message`] exactly
/// once, supply-side messages and unknown types are dropped without error.
///
/// [`handle_chat_message`]: ChatNotificationHandler::handle_chat_message
#[async_trait]
pub trait ChatNotificationHandler: Send + Sync {
    async fn handle_chat_message(
        &self,
        timestamp: i64,
        payload: &ChatMessagePayload,
    ) -> Result<(), HandlerError>;
}

#[async_trait]
impl<T> NotificationHandler for T
where
    T: ChatNotificationHandler,
{
    async fn handle(&self, notification: &Notification) -> Result<DispatchOutcome, HandlerError> {
        let span = tracing::info_span!(
            "Dispatch notification.",
            notification_type = %notification.r#type,
            message_id = %notification.payload.id
        );

        match notification.r#type.as_str() {
            CHAT_MESSAGE => {
                if notification.payload.sender.is_supply {
                    tracing::debug!(
                        parent: &span,
                        sender_id = %notification.payload.sender.id,
                        "Skipping chat message sent by supply side"
                    );
                    return Ok(DispatchOutcome::SupplySenderSkipped);
                }

                self.handle_chat_message(notification.timestamp, &notification.payload)
                    .instrument(span)
                    .await
                    .map(|_| DispatchOutcome::Handled)
            }
            _ => {
                tracing::info!(parent: &span, "Ignoring notification of unrouted type");
                Ok(DispatchOutcome::TypeIgnored)
            }
        }
    }
}
