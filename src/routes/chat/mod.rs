mod event;
mod message;
mod notification;
mod session;

pub use event::*;
pub use message::*;
pub use notification::*;
pub use session::*;

use crate::handlers::HandlerError;
use crate::helpers::JsonError;

fn handler_error(err: HandlerError) -> actix_web::Error {
    match err {
        HandlerError::UnknownEventType(_) | HandlerError::InvalidMessage(_) => {
            JsonError::bad_request(err)
        }
        HandlerError::NotFound(_) => JsonError::not_found(err),
        HandlerError::Store(ref source) => {
            tracing::error!("Chat store failure: {:?}", source);
            JsonError::internal_server_error("Failed to store chat message")
        }
    }
}
