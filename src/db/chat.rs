use crate::models::{Chat, ChatKey};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn fetch(pool: &PgPool, id: Uuid) -> Result<Option<Chat>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch chat by id.", chat_id = %id);
    sqlx::query_as::<_, Chat>(
        r#"SELECT id, post_token, user_id, peer_id, created_at, updated_at
           FROM chats
           WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
}

pub async fn fetch_by_key(pool: &PgPool, key: &ChatKey) -> Result<Option<Chat>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch chat by post and participants.");
    sqlx::query_as::<_, Chat>(
        r#"SELECT id, post_token, user_id, peer_id, created_at, updated_at
           FROM chats
           WHERE post_token = $1 AND user_id = $2 AND peer_id = $3"#,
    )
    .bind(&key.post_token)
    .bind(&key.user_id)
    .bind(&key.peer_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
}

/// Creates the chat for `key`, or bumps `updated_at` of the existing one.
pub async fn upsert(pool: &PgPool, key: &ChatKey) -> Result<Chat, sqlx::Error> {
    let query_span = tracing::info_span!(
        "Upsert chat.",
        post_token = %key.post_token,
        user_id = %key.user_id,
        peer_id = %key.peer_id
    );
    sqlx::query_as::<_, Chat>(
        r#"INSERT INTO chats (post_token, user_id, peer_id)
           VALUES ($1, $2, $3)
           ON CONFLICT (post_token, user_id, peer_id)
           DO UPDATE SET updated_at = NOW()
           RETURNING id, post_token, user_id, peer_id, created_at, updated_at"#,
    )
    .bind(&key.post_token)
    .bind(&key.user_id)
    .bind(&key.peer_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to upsert chat: {:?}", err);
        err
    })
}
