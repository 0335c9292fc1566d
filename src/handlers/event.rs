use super::HandlerError;
use crate::models::{Event, EventKind, Message};
use async_trait::async_trait;
use tracing::Instrument;

/// Reacts to internally raised [`Event`]s.
///
/// Implementors supply one method per event kind; [`EventHandler::handle_event`]
/// picks exactly one of them. Events of an unrecognized type are refused
/// with [`HandlerError::UnknownEventType`] and reach no method.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle_new_message(&self, event: &Event, message: &Message) -> Result<(), HandlerError>;

    async fn handle_new_chatbot_message(
        &self,
        event: &Event,
        message: &Message,
    ) -> Result<(), HandlerError>;

    async fn handle_event(&self, event: &Event) -> Result<(), HandlerError> {
        let span = tracing::info_span!("Dispatch event.", event_type = %event.event_type());
        match &event.kind {
            EventKind::NewMessage(message) => {
                self.handle_new_message(event, message).instrument(span).await
            }
            EventKind::NewChatbotMessage(message) => {
                self.handle_new_chatbot_message(event, message)
                    .instrument(span)
                    .await
            }
            EventKind::Unrecognized(raw) => {
                tracing::warn!(parent: &span, raw_type = %raw, "Refusing event of unknown type");
                Err(HandlerError::UnknownEventType(raw.clone()))
            }
        }
    }
}
