use super::Message;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Provider-defined metadata attached to an event, kept as-is.
pub type EventMetadata = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Unknown,
    NewMessage,
    NewChatbotMessage,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::NewMessage => "NEW_MESSAGE",
            Self::NewChatbotMessage => "NEW_CHATBOT_MESSAGE",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened. Each recognized kind carries exactly its own message.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    NewMessage(Message),
    NewChatbotMessage(Message),
    /// Raw `type` value that no dispatcher knows, `"UNKNOWN"` included.
    Unrecognized(String),
}

/// Internally raised occurrence.
///
/// On the wire an event keeps the flat shape
/// `{type, new_message?, new_chatbot_message?, metadata?}`; decoding refuses
/// a recognized type whose matching message is missing or whose other
/// message field is also present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EventEnvelope", into = "EventEnvelope")]
pub struct Event {
    pub kind: EventKind,
    pub metadata: Option<EventMetadata>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            metadata: None,
        }
    }

    pub fn new_message(message: Message) -> Self {
        Self::new(EventKind::NewMessage(message))
    }

    pub fn new_chatbot_message(message: Message) -> Self {
        Self::new(EventKind::NewChatbotMessage(message))
    }

    pub fn with_metadata(mut self, metadata: EventMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn event_type(&self) -> EventType {
        match self.kind {
            EventKind::NewMessage(_) => EventType::NewMessage,
            EventKind::NewChatbotMessage(_) => EventType::NewChatbotMessage,
            EventKind::Unrecognized(_) => EventType::Unknown,
        }
    }

    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            EventKind::NewMessage(message) | EventKind::NewChatbotMessage(message) => {
                Some(message)
            }
            EventKind::Unrecognized(_) => None,
        }
    }
}

/// Flat wire form of an [`Event`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    new_message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    new_chatbot_message: Option<Message>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<EventMetadata>,
}

impl TryFrom<EventEnvelope> for Event {
    type Error = String;

    fn try_from(envelope: EventEnvelope) -> Result<Self, Self::Error> {
        let kind = match (
            envelope.r#type.as_str(),
            envelope.new_message,
            envelope.new_chatbot_message,
        ) {
            ("NEW_MESSAGE", Some(message), None) => EventKind::NewMessage(message),
            ("NEW_CHATBOT_MESSAGE", None, Some(message)) => EventKind::NewChatbotMessage(message),
            ("NEW_MESSAGE", _, _) => {
                return Err("NEW_MESSAGE event must carry only new_message".to_string())
            }
            ("NEW_CHATBOT_MESSAGE", _, _) => {
                return Err(
                    "NEW_CHATBOT_MESSAGE event must carry only new_chatbot_message".to_string(),
                )
            }
            (other, _, _) => EventKind::Unrecognized(other.to_string()),
        };

        Ok(Event {
            kind,
            metadata: envelope.metadata,
        })
    }
}

impl From<Event> for EventEnvelope {
    fn from(event: Event) -> Self {
        let (r#type, new_message, new_chatbot_message) = match event.kind {
            EventKind::NewMessage(message) => (EventType::NewMessage.to_string(), Some(message), None),
            EventKind::NewChatbotMessage(message) => {
                (EventType::NewChatbotMessage.to_string(), None, Some(message))
            }
            EventKind::Unrecognized(raw) => (raw, None, None),
        };

        EventEnvelope {
            r#type,
            new_message,
            new_chatbot_message,
            metadata: event.metadata,
        }
    }
}
