use crate::db::ChatStore;
use crate::helpers::{JsonError, JsonResponse};
use crate::models::{ChatMessage, ChatMessageOwner};
use actix_web::{get, web, Responder, Result};
use std::sync::Arc;
use uuid::Uuid;

/// GET /chat/{chat_id}/messages
#[tracing::instrument(name = "List chat messages.", skip(store))]
#[get("/{chat_id}/messages")]
pub async fn chat_messages_handler(
    path: web::Path<(Uuid,)>,
    store: web::Data<Arc<dyn ChatStore>>,
) -> Result<impl Responder> {
    let chat_id = path.into_inner().0;
    let chat = store
        .fetch_chat(chat_id)
        .await
        .map_err(|err| JsonError::internal_server_error(err.to_string()))?
        .ok_or_else(|| JsonError::not_found("Chat not found"))?;

    store
        .list_messages(ChatMessageOwner::Chat(chat.id))
        .await
        .map(|messages| JsonResponse::<ChatMessage>::build().set_list(messages).ok("OK"))
        .map_err(|err| JsonError::internal_server_error(err.to_string()))
}

/// GET /chat/bots/{user_id}/messages
#[tracing::instrument(name = "List chat bot messages.", skip(store))]
#[get("/bots/{user_id}/messages")]
pub async fn chat_bot_messages_handler(
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ChatStore>>,
) -> Result<impl Responder> {
    let user_id = path.into_inner().0;
    let bot = store
        .fetch_chat_bot(&user_id)
        .await
        .map_err(|err| JsonError::internal_server_error(err.to_string()))?
        .ok_or_else(|| JsonError::not_found("Chat bot not found"))?;

    store
        .list_messages(ChatMessageOwner::ChatBot(bot.id))
        .await
        .map(|messages| JsonResponse::<ChatMessage>::build().set_list(messages).ok("OK"))
        .map_err(|err| JsonError::internal_server_error(err.to_string()))
}
