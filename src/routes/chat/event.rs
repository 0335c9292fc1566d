use super::handler_error;
use crate::db::ChatStore;
use crate::handlers::{EventHandler, MessageEventRecorder};
use crate::helpers::JsonResponse;
use crate::models::{Event, EventType};
use actix_web::{post, web, Responder, Result};
use std::sync::Arc;

/// POST /chat/events
/// Intake for events raised by our own services. Unlike provider
/// notifications, an event of unknown type is refused.
#[tracing::instrument(name = "Receive chat event.", skip_all)]
#[post("/events")]
pub async fn event_handler(
    web::Json(event): web::Json<Event>,
    store: web::Data<Arc<dyn ChatStore>>,
) -> Result<impl Responder> {
    let recorder = MessageEventRecorder::new(store.get_ref().clone());
    recorder
        .handle_event(&event)
        .await
        .map(|_| {
            JsonResponse::<EventType>::build()
                .set_item(event.event_type())
                .ok("Event handled")
        })
        .map_err(handler_error)
}
