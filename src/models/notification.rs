use serde::{Deserialize, Serialize};

/// The only notification type that is routed today.
pub const CHAT_MESSAGE: &str = "CHAT_MESSAGE";

/// A participant in an inbound notification. `is_supply` marks the seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessagePayloadUser {
    pub id: String,
    pub is_supply: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessagePayloadMetadata {
    pub title: String,
    pub category: String,
    pub post_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageTextData {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessagePayload {
    pub id: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub data: ChatMessageTextData,
    pub sender: ChatMessagePayloadUser,
    pub receiver: ChatMessagePayloadUser,
    pub metadata: ChatMessagePayloadMetadata,
    /// Epoch seconds
    pub sent_at: i64,
}

/// Envelope the chat provider posts to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(rename = "type")]
    pub r#type: String,
    /// Epoch seconds
    pub timestamp: i64,
    pub payload: ChatMessagePayload,
}
