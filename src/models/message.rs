use super::Conversation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageSenderSide {
    #[default]
    SideUnknown,
    Buyer,
    Seller,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageSenderType {
    #[default]
    TypeUnknown,
    Human,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    #[default]
    Unknown,
    Text,
}

impl MessageSenderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SideUnknown => "SIDE_UNKNOWN",
            Self::Buyer => "BUYER",
            Self::Seller => "SELLER",
        }
    }
}

impl MessageSenderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeUnknown => "TYPE_UNKNOWN",
            Self::Human => "HUMAN",
            Self::Bot => "BOT",
        }
    }
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Text => "TEXT",
        }
    }
}

// Stored values and provider strings are matched case-insensitively,
// anything unexpected falls back to the unknown variant.

impl From<&str> for MessageSenderSide {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "BUYER" => Self::Buyer,
            "SELLER" => Self::Seller,
            _ => Self::SideUnknown,
        }
    }
}

impl From<&str> for MessageSenderType {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "HUMAN" => Self::Human,
            "BOT" => Self::Bot,
            _ => Self::TypeUnknown,
        }
    }
}

impl From<&str> for MessageType {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "TEXT" => Self::Text,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for MessageSenderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MessageSenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageSender {
    #[serde(default)]
    pub side: MessageSenderSide,
    #[serde(default, rename = "type")]
    pub r#type: MessageSenderType,
}

/// A single chat message. `text` is only set for `TEXT` messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation: Conversation,
    pub sender: MessageSender,
    #[serde(rename = "type")]
    pub r#type: MessageType,
    pub sent_at: DateTime<Utc>,
    #[serde(default)]
    pub text: Option<String>,
}
