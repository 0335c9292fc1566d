use crate::models::{ChatMessage, ChatMessageOwner, NewChatMessage};
use sqlx::{PgPool, Postgres};
use tracing::Instrument;
use uuid::Uuid;

/// Stores the message and touches its chat or chat bot in one transaction.
pub async fn insert(pool: &PgPool, message: NewChatMessage) -> Result<ChatMessage, sqlx::Error> {
    let query_span = tracing::info_span!("Saving new chat message into the database.", owner = ?message.owner);
    let mut tx = pool.begin().await?;

    let stored = sqlx::query_as::<_, ChatMessage>(
        r#"INSERT INTO chat_messages (chat_id, chat_bot_id, sender_side, sender_type, type, message)
           VALUES ($1, $2, $3, $4, $5, $6)
           RETURNING id, chat_id, chat_bot_id, sender_side, sender_type, type, message, created_at, updated_at"#,
    )
    .bind(message.owner.chat_id())
    .bind(message.owner.chat_bot_id())
    .bind(message.sender_side.as_str())
    .bind(message.sender_type.as_str())
    .bind(message.r#type.as_str())
    .bind(&message.message)
    .fetch_one(&mut *tx)
    .instrument(query_span.clone())
    .await
    .map_err(|err| {
        tracing::error!("Failed to insert chat message: {:?}", err);
        err
    })?;

    let touch = match message.owner {
        ChatMessageOwner::Chat(id) => {
            sqlx::query::<Postgres>("UPDATE chats SET updated_at = NOW() WHERE id = $1").bind(id)
        }
        ChatMessageOwner::ChatBot(id) => {
            sqlx::query::<Postgres>("UPDATE chat_bots SET updated_at = NOW() WHERE id = $1").bind(id)
        }
    };
    touch.execute(&mut *tx).instrument(query_span).await?;

    tx.commit().await?;
    Ok(stored)
}

pub async fn list_by_chat(pool: &PgPool, chat_id: Uuid) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let query_span = tracing::info_span!("List chat messages.", chat_id = %chat_id);
    sqlx::query_as::<_, ChatMessage>(
        r#"SELECT id, chat_id, chat_bot_id, sender_side, sender_type, type, message, created_at, updated_at
           FROM chat_messages
           WHERE chat_id = $1
           ORDER BY created_at"#,
    )
    .bind(chat_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
}

pub async fn list_by_chat_bot(pool: &PgPool, chat_bot_id: Uuid) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let query_span = tracing::info_span!("List chat bot messages.", chat_bot_id = %chat_bot_id);
    sqlx::query_as::<_, ChatMessage>(
        r#"SELECT id, chat_id, chat_bot_id, sender_side, sender_type, type, message, created_at, updated_at
           FROM chat_messages
           WHERE chat_bot_id = $1
           ORDER BY created_at"#,
    )
    .bind(chat_bot_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
}
