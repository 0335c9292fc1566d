use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationType {
    #[default]
    Unknown,
    Post, // buyer and seller talking about a listing
    Bot,
}

/// A chat thread. For `Post` conversations `post_token` names the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(rename = "type")]
    pub r#type: ConversationType,
    #[serde(default)]
    pub post_token: Option<String>,
}
