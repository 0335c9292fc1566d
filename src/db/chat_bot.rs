use crate::models::ChatBot;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn fetch_by_user_id(pool: &PgPool, user_id: &str) -> Result<Option<ChatBot>, sqlx::Error> {
    let query_span = tracing::info_span!("Fetch chat bot by user id.", user_id = user_id);
    sqlx::query_as::<_, ChatBot>(
        r#"SELECT id, user_id, created_at, updated_at
           FROM chat_bots
           WHERE user_id = $1"#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
}

pub async fn upsert(pool: &PgPool, user_id: &str) -> Result<ChatBot, sqlx::Error> {
    let query_span = tracing::info_span!("Upsert chat bot.", user_id = user_id);
    sqlx::query_as::<_, ChatBot>(
        r#"INSERT INTO chat_bots (user_id)
           VALUES ($1)
           ON CONFLICT (user_id)
           DO UPDATE SET updated_at = NOW()
           RETURNING id, user_id, created_at, updated_at"#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to upsert chat bot: {:?}", err);
        err
    })
}
