use super::handler_error;
use crate::configuration::ChatProviderSettings;
use crate::db::ChatStore;
use crate::handlers::{ChatMessageRecorder, DispatchOutcome, NotificationHandler};
use crate::helpers::signature::{self, SIGNATURE_HEADER};
use crate::helpers::{JsonError, JsonResponse};
use crate::models::{Notification, CHAT_MESSAGE};
use actix_web::{post, web, HttpRequest, Responder, Result};
use serde::Deserialize;
use std::sync::Arc;

/// Just the routing field, so unrouted payload shapes are never parsed.
#[derive(Deserialize)]
struct NotificationType {
    #[serde(rename = "type")]
    r#type: String,
}

/// POST /chat/notifications
/// Webhook the chat provider pushes notifications to. Unknown notification
/// types and seller-side messages are acknowledged without being stored.
#[tracing::instrument(name = "Receive chat notification.", skip_all)]
#[post("/notifications")]
pub async fn notification_handler(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<Arc<dyn ChatStore>>,
    provider: web::Data<ChatProviderSettings>,
) -> Result<impl Responder> {
    if let Some(secret) = provider.webhook_secret.as_deref() {
        let given = req
            .headers()
            .get(SIGNATURE_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();
        if !signature::verify(secret.as_bytes(), &body, given) {
            tracing::warn!("Rejecting notification with a bad signature");
            return Err(JsonError::unauthorized("Invalid notification signature"));
        }
    }

    let kind: NotificationType = serde_json::from_slice(&body).map_err(|err| {
        tracing::info!("Malformed notification: {}", err);
        JsonError::bad_request(format!("Malformed notification: {}", err))
    })?;
    if kind.r#type != CHAT_MESSAGE {
        tracing::info!(notification_type = %kind.r#type, "Ignoring notification type");
        return Ok(JsonResponse::<DispatchOutcome>::build()
            .set_item(DispatchOutcome::TypeIgnored)
            .ok("OK"));
    }

    let notification: Notification = serde_json::from_slice(&body).map_err(|err| {
        tracing::info!("Malformed notification: {}", err);
        JsonError::bad_request(format!("Malformed notification: {}", err))
    })?;

    let recorder = ChatMessageRecorder::new(store.get_ref().clone());
    recorder
        .handle(&notification)
        .await
        .map(|outcome| JsonResponse::<DispatchOutcome>::build().set_item(outcome).ok("OK"))
        .map_err(handler_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryChatStore;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn provider(secret: Option<&str>) -> ChatProviderSettings {
        ChatProviderSettings {
            base_url: "http://localhost:9000".to_string(),
            api_key: String::new(),
            callback_url: "http://localhost:8000/chat/notifications".to_string(),
            timeout_secs: 5,
            webhook_secret: secret.map(str::to_string),
        }
    }

    fn notification(kind: &str, sender_is_supply: bool) -> serde_json::Value {
        json!({
            "type": kind,
            "timestamp": 1700000000,
            "payload": {
                "id": "msg-1",
                "type": "TEXT",
                "data": {"text": "hello"},
                "sender": {"id": "buyer-1", "is_supply": sender_is_supply},
                "receiver": {"id": "seller-1", "is_supply": !sender_is_supply},
                "metadata": {"title": "Bike", "category": "sports", "post_token": "wX1y"},
                "sent_at": 1699999990
            }
        })
    }

    macro_rules! init_app {
        ($store:expr, $provider:expr) => {{
            let store: Arc<dyn ChatStore> = $store.clone();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(store))
                    .app_data(web::Data::new($provider))
                    .service(web::scope("/chat").service(notification_handler)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_buyer_message_is_stored() {
        let store = Arc::new(MemoryChatStore::default());
        let app = init_app!(store, provider(None));

        let req = test::TestRequest::post()
            .uri("/chat/notifications")
            .set_json(notification("CHAT_MESSAGE", false))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["item"], "handled");
        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.messages()[0].message, "hello");
    }

    #[actix_web::test]
    async fn test_supply_message_and_unknown_type_are_acknowledged() {
        let store = Arc::new(MemoryChatStore::default());
        let app = init_app!(store, provider(None));

        let req = test::TestRequest::post()
            .uri("/chat/notifications")
            .set_json(notification("CHAT_MESSAGE", true))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["item"], "supply_sender_skipped");

        let req = test::TestRequest::post()
            .uri("/chat/notifications")
            .set_json(notification("ORDER_UPDATE", false))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["item"], "type_ignored");

        assert!(store.messages().is_empty());
    }

    #[actix_web::test]
    async fn test_unrouted_type_with_foreign_payload_is_acknowledged() {
        let store = Arc::new(MemoryChatStore::default());
        let app = init_app!(store, provider(None));

        let req = test::TestRequest::post()
            .uri("/chat/notifications")
            .set_json(json!({
                "type": "ORDER_UPDATE",
                "timestamp": 1700000000,
                "payload": {"order_id": "o-1", "status": "PAID"}
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["item"], "type_ignored");
        assert!(store.messages().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_notification_is_bad_request() {
        let store = Arc::new(MemoryChatStore::default());
        let app = init_app!(store, provider(None));

        let req = test::TestRequest::post()
            .uri("/chat/notifications")
            .set_json(json!({"type": "CHAT_MESSAGE"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_signature_is_checked_when_secret_is_set() {
        let store = Arc::new(MemoryChatStore::default());
        let app = init_app!(store, provider(Some("s3cret")));
        let body = serde_json::to_vec(&notification("CHAT_MESSAGE", false)).unwrap();

        let req = test::TestRequest::post()
            .uri("/chat/notifications")
            .insert_header(("Content-Type", "application/json"))
            .insert_header((SIGNATURE_HEADER, "deadbeef"))
            .set_payload(body.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(store.messages().is_empty());

        let req = test::TestRequest::post()
            .uri("/chat/notifications")
            .insert_header(("Content-Type", "application/json"))
            .insert_header((SIGNATURE_HEADER, signature::sign(b"s3cret", &body).unwrap()))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(store.messages().len(), 1);
    }
}
