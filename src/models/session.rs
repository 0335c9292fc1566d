use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartChatSessionUser {
    pub id: String,
}

/// Asks the chat provider to open a session between a supplier and a demand
/// user on a post. The provider reports new messages to `callback_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartChatSessionRequest {
    pub post_token: String,
    pub user_id: String,
    pub peer_id: String,
    pub callback_url: String,
    pub supplier: StartChatSessionUser,
    pub demand: StartChatSessionUser,
}
