use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Unknown event type: {0}")]
    UnknownEventType(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Store error: {0}")]
    Store(#[from] sqlx::Error),
}
