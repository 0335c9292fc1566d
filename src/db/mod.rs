//! Persistence of chats, chat bots and their messages.
//!
//! Free functions per table work straight on a `PgPool`. Handlers never call
//! them directly; they go through [`ChatStore`] so they can be exercised
//! without a database.

pub mod chat;
pub mod chat_bot;
pub mod chat_message;
#[cfg(test)]
pub mod memory;

use crate::models::{Chat, ChatBot, ChatKey, ChatMessage, ChatMessageOwner, NewChatMessage};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

#[cfg(test)]
pub use memory::MemoryChatStore;

#[async_trait]
pub trait ChatStore: Send + Sync {
    async fn fetch_chat(&self, id: Uuid) -> Result<Option<Chat>, sqlx::Error>;

    async fn fetch_chat_by_key(&self, key: &ChatKey) -> Result<Option<Chat>, sqlx::Error>;

    async fn upsert_chat(&self, key: &ChatKey) -> Result<Chat, sqlx::Error>;

    async fn fetch_chat_bot(&self, user_id: &str) -> Result<Option<ChatBot>, sqlx::Error>;

    async fn upsert_chat_bot(&self, user_id: &str) -> Result<ChatBot, sqlx::Error>;

    async fn insert_message(&self, message: NewChatMessage) -> Result<ChatMessage, sqlx::Error>;

    async fn list_messages(&self, owner: ChatMessageOwner) -> Result<Vec<ChatMessage>, sqlx::Error>;
}

/// [`ChatStore`] backed by Postgres.
#[derive(Clone)]
pub struct PgChatStore {
    pool: PgPool,
}

impl PgChatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatStore for PgChatStore {
    async fn fetch_chat(&self, id: Uuid) -> Result<Option<Chat>, sqlx::Error> {
        chat::fetch(&self.pool, id).await
    }

    async fn fetch_chat_by_key(&self, key: &ChatKey) -> Result<Option<Chat>, sqlx::Error> {
        chat::fetch_by_key(&self.pool, key).await
    }

    async fn upsert_chat(&self, key: &ChatKey) -> Result<Chat, sqlx::Error> {
        chat::upsert(&self.pool, key).await
    }

    async fn fetch_chat_bot(&self, user_id: &str) -> Result<Option<ChatBot>, sqlx::Error> {
        chat_bot::fetch_by_user_id(&self.pool, user_id).await
    }

    async fn upsert_chat_bot(&self, user_id: &str) -> Result<ChatBot, sqlx::Error> {
        chat_bot::upsert(&self.pool, user_id).await
    }

    async fn insert_message(&self, message: NewChatMessage) -> Result<ChatMessage, sqlx::Error> {
        chat_message::insert(&self.pool, message).await
    }

    async fn list_messages(&self, owner: ChatMessageOwner) -> Result<Vec<ChatMessage>, sqlx::Error> {
        match owner {
            ChatMessageOwner::Chat(id) => chat_message::list_by_chat(&self.pool, id).await,
            ChatMessageOwner::ChatBot(id) => chat_message::list_by_chat_bot(&self.pool, id).await,
        }
    }
}
