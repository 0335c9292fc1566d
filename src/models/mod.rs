mod chat;
mod conversation;
mod event;
mod message;
mod notification;
mod session;

pub use chat::*;
pub use conversation::*;
pub use event::*;
pub use message::*;
pub use notification::*;
pub use session::*;
