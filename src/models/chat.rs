use super::{MessageSenderSide, MessageSenderType, MessageType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};
use uuid::Uuid;

/// One post, one seller, one buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Chat {
    pub id: Uuid,
    pub post_token: String,
    pub user_id: String,
    pub peer_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Unique key of a [`Chat`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatKey {
    pub post_token: String,
    pub user_id: String,
    pub peer_id: String,
}

impl ChatKey {
    pub fn new(
        post_token: impl Into<String>,
        user_id: impl Into<String>,
        peer_id: impl Into<String>,
    ) -> Self {
        Self {
            post_token: post_token.into(),
            user_id: user_id.into(),
            peer_id: peer_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatBot {
    pub id: Uuid,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Conversation a stored message belongs to, never both, never neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ChatMessageOwner {
    Chat(Uuid),
    ChatBot(Uuid),
}

impl ChatMessageOwner {
    pub fn chat_id(&self) -> Option<Uuid> {
        match self {
            Self::Chat(id) => Some(*id),
            Self::ChatBot(_) => None,
        }
    }

    pub fn chat_bot_id(&self) -> Option<Uuid> {
        match self {
            Self::ChatBot(id) => Some(*id),
            Self::Chat(_) => None,
        }
    }

    pub fn from_columns(
        chat_id: Option<Uuid>,
        chat_bot_id: Option<Uuid>,
    ) -> Result<Self, String> {
        match (chat_id, chat_bot_id) {
            (Some(id), None) => Ok(Self::Chat(id)),
            (None, Some(id)) => Ok(Self::ChatBot(id)),
            (Some(_), Some(_)) => Err("chat message references both a chat and a chat bot".to_string()),
            (None, None) => Err("chat message references neither a chat nor a chat bot".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub owner: ChatMessageOwner,
    pub sender_side: MessageSenderSide,
    pub sender_type: MessageSenderType,
    #[serde(rename = "type")]
    pub r#type: MessageType,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies when storing a message; ids and timestamps come from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChatMessage {
    pub owner: ChatMessageOwner,
    pub sender_side: MessageSenderSide,
    pub sender_type: MessageSenderType,
    pub r#type: MessageType,
    pub message: String,
}

impl<'r> FromRow<'r, PgRow> for ChatMessage {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        let owner = ChatMessageOwner::from_columns(row.try_get("chat_id")?, row.try_get("chat_bot_id")?)
            .map_err(|msg| sqlx::Error::ColumnDecode {
                index: "chat_id".to_string(),
                source: msg.into(),
            })?;
        let sender_side: String = row.try_get("sender_side")?;
        let sender_type: String = row.try_get("sender_type")?;
        let r#type: String = row.try_get("type")?;

        Ok(ChatMessage {
            id: row.try_get("id")?,
            owner,
            sender_side: MessageSenderSide::from(sender_side.as_str()),
            sender_type: MessageSenderType::from(sender_type.as_str()),
            r#type: MessageType::from(r#type.as_str()),
            message: row.try_get("message")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_requires_exactly_one_reference() {
        let id = Uuid::new_v4();
        assert_eq!(
            ChatMessageOwner::from_columns(Some(id), None),
            Ok(ChatMessageOwner::Chat(id))
        );
        assert_eq!(
            ChatMessageOwner::from_columns(None, Some(id)),
            Ok(ChatMessageOwner::ChatBot(id))
        );
        assert!(ChatMessageOwner::from_columns(Some(id), Some(id)).is_err());
        assert!(ChatMessageOwner::from_columns(None, None).is_err());
    }

    #[test]
    fn test_owner_column_accessors() {
        let id = Uuid::new_v4();
        let owner = ChatMessageOwner::ChatBot(id);
        assert_eq!(owner.chat_id(), None);
        assert_eq!(owner.chat_bot_id(), Some(id));
    }

    #[test]
    fn test_chat_message_serialization() {
        let id = Uuid::new_v4();
        let message = ChatMessage {
            id,
            owner: ChatMessageOwner::Chat(id),
            sender_side: MessageSenderSide::Buyer,
            sender_type: MessageSenderType::Human,
            r#type: MessageType::Text,
            message: "hello".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["owner"]["kind"], "chat");
        assert_eq!(json["sender_side"], "BUYER");
        assert_eq!(json["type"], "TEXT");
    }
}
