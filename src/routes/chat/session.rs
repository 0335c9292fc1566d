use crate::configuration::ChatProviderSettings;
use crate::connectors::ChatProviderConnector;
use crate::db::ChatStore;
use crate::helpers::{JsonError, JsonResponse};
use crate::models::{Chat, ChatKey, StartChatSessionRequest, StartChatSessionUser};
use actix_web::{post, web, Responder, Result};
use serde::Deserialize;
use serde_valid::Validate;
use std::sync::Arc;

#[derive(Debug, Deserialize, Validate)]
pub struct StartSessionForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub post_token: String,
    /// Seller who owns the post
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub supplier_id: String,
    /// Buyer the seller talks to
    #[validate(min_length = 1)]
    #[validate(max_length = 255)]
    pub demand_id: String,
}

impl StartSessionForm {
    fn chat_key(&self) -> ChatKey {
        ChatKey::new(&self.post_token, &self.supplier_id, &self.demand_id)
    }

    fn into_request(self, callback_url: &str) -> StartChatSessionRequest {
        StartChatSessionRequest {
            callback_url: callback_url.to_string(),
            user_id: self.supplier_id.clone(),
            peer_id: self.demand_id.clone(),
            supplier: StartChatSessionUser { id: self.supplier_id },
            demand: StartChatSessionUser { id: self.demand_id },
            post_token: self.post_token,
        }
    }
}

/// POST /chat/sessions
/// Creates (or reuses) the chat for a post and its two participants and asks
/// the provider to start delivering its messages to our webhook.
#[tracing::instrument(name = "Start chat session.", skip(store, connector, provider))]
#[post("/sessions")]
pub async fn session_handler(
    web::Json(form): web::Json<StartSessionForm>,
    store: web::Data<Arc<dyn ChatStore>>,
    connector: web::Data<Arc<dyn ChatProviderConnector>>,
    provider: web::Data<ChatProviderSettings>,
) -> Result<impl Responder> {
    if let Err(errors) = form.validate() {
        return Err(JsonError::bad_request(errors));
    }

    let chat = store.upsert_chat(&form.chat_key()).await.map_err(|err| {
        tracing::error!("Failed to upsert chat: {:?}", err);
        JsonError::internal_server_error("Failed to create chat")
    })?;

    let request = form.into_request(&provider.callback_url);
    connector.start_session(&request).await?;

    Ok(JsonResponse::<Chat>::build()
        .set_id(chat.id)
        .set_item(chat)
        .ok("Chat session started"))
}
