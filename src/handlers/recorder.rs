use super::{ChatNotificationHandler, EventHandler, HandlerError};
use crate::db::ChatStore;
use crate::models::{
    ChatKey, ChatMessageOwner, ChatMessagePayload, Event, Message, MessageSenderSide,
    MessageSenderType, MessageType, NewChatMessage,
};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Stores buyer chat messages pushed by the provider.
///
/// The chat is keyed by the post and both participants: the receiver is the
/// seller who owns the chat, the sender is their peer.
pub struct ChatMessageRecorder {
    store: Arc<dyn ChatStore>,
}

impl ChatMessageRecorder {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChatNotificationHandler for ChatMessageRecorder {
    async fn handle_chat_message(
        &self,
        timestamp: i64,
        payload: &ChatMessagePayload,
    ) -> Result<(), HandlerError> {
        let key = ChatKey::new(
            payload.metadata.post_token.as_str(),
            payload.receiver.id.as_str(),
            payload.sender.id.as_str(),
        );
        let chat = self.store.upsert_chat(&key).await?;

        let stored = self
            .store
            .insert_message(NewChatMessage {
                owner: ChatMessageOwner::Chat(chat.id),
                sender_side: MessageSenderSide::Buyer,
                sender_type: MessageSenderType::Human,
                r#type: MessageType::from(payload.r#type.as_str()),
                message: payload.data.text.clone(),
            })
            .await?;

        tracing::info!(
            chat_id = %chat.id,
            message_id = %stored.id,
            provider_message_id = %payload.id,
            notified_at = timestamp,
            "Stored buyer chat message"
        );
        Ok(())
    }
}

/// Stores internally raised message events.
///
/// `NEW_MESSAGE` events address an existing chat by its id in
/// `conversation.id`. `NEW_CHATBOT_MESSAGE` events address the bot of the
/// user named in `conversation.id`; the bot is created on first use.
pub struct MessageEventRecorder {
    store: Arc<dyn ChatStore>,
}

impl MessageEventRecorder {
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    async fn record(&self, owner: ChatMessageOwner, message: &Message) -> Result<(), HandlerError> {
        let text = message_text(message)?;
        let stored = self
            .store
            .insert_message(NewChatMessage {
                owner,
                sender_side: message.sender.side,
                sender_type: message.sender.r#type,
                r#type: message.r#type,
                message: text,
            })
            .await?;

        tracing::info!(
            owner = ?owner,
            message_id = %stored.id,
            event_message_id = %message.id,
            "Stored event message"
        );
        Ok(())
    }
}

fn message_text(message: &Message) -> Result<String, HandlerError> {
    match (message.r#type, &message.text) {
        (MessageType::Text, Some(text)) => Ok(text.clone()),
        (MessageType::Text, None) => Err(HandlerError::InvalidMessage(format!(
            "text message {} has no text",
            message.id
        ))),
        (_, text) => Ok(text.clone().unwrap_or_default()),
    }
}

#[async_trait]
impl EventHandler for MessageEventRecorder {
    async fn handle_new_message(&self, _event: &Event, message: &Message) -> Result<(), HandlerError> {
        let chat_id = Uuid::parse_str(&message.conversation.id).map_err(|_| {
            HandlerError::InvalidMessage(format!(
                "conversation id {} is not a chat id",
                message.conversation.id
            ))
        })?;
        let chat = self
            .store
            .fetch_chat(chat_id)
            .await?
            .ok_or_else(|| HandlerError::NotFound(format!("chat {}", chat_id)))?;

        self.record(ChatMessageOwner::Chat(chat.id), message).await
    }

    async fn handle_new_chatbot_message(
        &self,
        _event: &Event,
        message: &Message,
    ) -> Result<(), HandlerError> {
        let user_id = message.conversation.id.trim();
        if user_id.is_empty() {
            return Err(HandlerError::InvalidMessage(
                "chat bot conversation has no user id".to_string(),
            ));
        }
        let bot = self.store.upsert_chat_bot(user_id).await?;

        self.record(ChatMessageOwner::ChatBot(bot.id), message).await
    }
}
