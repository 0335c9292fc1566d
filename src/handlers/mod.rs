//! Dispatch of chat events and provider notifications.
//!
//! Two dispatchers live here with different policies for types they do not
//! know: [`EventHandler`] refuses them, [`NotificationHandler`] ignores them so
//! that new provider notification types never break the webhook.

mod errors;
mod event;
mod notification;
pub mod recorder;

pub use errors::HandlerError;
pub use event::EventHandler;
pub use notification::{ChatNotificationHandler, DispatchOutcome, NotificationHandler};
pub use recorder::{ChatMessageRecorder, MessageEventRecorder};
