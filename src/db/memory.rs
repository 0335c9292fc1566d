use super::ChatStore;
use crate::models::{Chat, ChatBot, ChatKey, ChatMessage, ChatMessageOwner, NewChatMessage};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

/// In-memory store for tests. Mirrors the unique keys of the real tables.
#[derive(Default)]
pub struct MemoryChatStore {
    chats: Mutex<Vec<Chat>>,
    chat_bots: Mutex<Vec<ChatBot>>,
    messages: Mutex<Vec<ChatMessage>>,
}

impl MemoryChatStore {
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn chats(&self) -> Vec<Chat> {
        self.chats.lock().unwrap().clone()
    }

    pub fn chat_bots(&self) -> Vec<ChatBot> {
        self.chat_bots.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn fetch_chat(&self, id: Uuid) -> Result<Option<Chat>, sqlx::Error> {
        Ok(self.chats.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn fetch_chat_by_key(&self, key: &ChatKey) -> Result<Option<Chat>, sqlx::Error> {
        Ok(self
            .chats
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.post_token == key.post_token && c.user_id == key.user_id && c.peer_id == key.peer_id)
            .cloned())
    }

    async fn upsert_chat(&self, key: &ChatKey) -> Result<Chat, sqlx::Error> {
        let mut chats = self.chats.lock().unwrap();
        let now = Utc::now();
        if let Some(chat) = chats
            .iter_mut()
            .find(|c| c.post_token == key.post_token && c.user_id == key.user_id && c.peer_id == key.peer_id)
        {
            chat.updated_at = now;
            return Ok(chat.clone());
        }

        let chat = Chat {
            id: Uuid::new_v4(),
            post_token: key.post_token.clone(),
            user_id: key.user_id.clone(),
            peer_id: key.peer_id.clone(),
            created_at: now,
            updated_at: now,
        };
        chats.push(chat.clone());
        Ok(chat)
    }

    async fn fetch_chat_bot(&self, user_id: &str) -> Result<Option<ChatBot>, sqlx::Error> {
        Ok(self
            .chat_bots
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.user_id == user_id)
            .cloned())
    }

    async fn upsert_chat_bot(&self, user_id: &str) -> Result<ChatBot, sqlx::Error> {
        let mut bots = self.chat_bots.lock().unwrap();
        let now = Utc::now();
        if let Some(bot) = bots.iter_mut().find(|b| b.user_id == user_id) {
            bot.updated_at = now;
            return Ok(bot.clone());
        }

        let bot = ChatBot {
            id: Uuid::new_v4(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        bots.push(bot.clone());
        Ok(bot)
    }

    async fn insert_message(&self, message: NewChatMessage) -> Result<ChatMessage, sqlx::Error> {
        let owner_exists = match message.owner {
            ChatMessageOwner::Chat(id) => self.chats.lock().unwrap().iter().any(|c| c.id == id),
            ChatMessageOwner::ChatBot(id) => self.chat_bots.lock().unwrap().iter().any(|b| b.id == id),
        };
        if !owner_exists {
            return Err(sqlx::Error::RowNotFound);
        }

        let now = Utc::now();
        let stored = ChatMessage {
            id: Uuid::new_v4(),
            owner: message.owner,
            sender_side: message.sender_side,
            sender_type: message.sender_type,
            r#type: message.r#type,
            message: message.message,
            created_at: now,
            updated_at: now,
        };
        self.messages.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn list_messages(&self, owner: ChatMessageOwner) -> Result<Vec<ChatMessage>, sqlx::Error> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.owner == owner)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_chat_by_key_matches_the_whole_key() {
        let store = MemoryChatStore::default();
        let key = ChatKey::new("wX1y", "seller-1", "buyer-1");
        let chat = store.upsert_chat(&key).await.unwrap();

        let found = store.fetch_chat_by_key(&key).await.unwrap();
        assert_eq!(found.map(|c| c.id), Some(chat.id));

        for other in [
            ChatKey::new("zZ9q", "seller-1", "buyer-1"),
            ChatKey::new("wX1y", "seller-2", "buyer-1"),
            ChatKey::new("wX1y", "seller-1", "buyer-2"),
        ] {
            assert!(store.fetch_chat_by_key(&other).await.unwrap().is_none());
        }
    }

    #[tokio::test]
    async fn test_upsert_chat_keeps_one_row_per_key() {
        let store = MemoryChatStore::default();
        let key = ChatKey::new("wX1y", "seller-1", "buyer-1");

        let first = store.upsert_chat(&key).await.unwrap();
        let second = store.upsert_chat(&key).await.unwrap();

        assert_eq!(first.id, second.id);
        assert!(second.updated_at >= first.updated_at);
        assert_eq!(store.chats().len(), 1);
    }
}
