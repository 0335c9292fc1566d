use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Errors talking to the chat provider
#[derive(Debug)]
pub enum ConnectorError {
    /// Unexpected status or transport failure
    HttpError(String),
    /// Provider unreachable or timed out
    ServiceUnavailable(String),
    /// Provider rejected our API key (401/403)
    Unauthorized(String),
    /// Endpoint or post unknown to the provider (404)
    NotFound(String),
    /// Provider refused the request body (400/422)
    Rejected(String),
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpError(msg) => write!(f, "HTTP error: {}", msg),
            Self::ServiceUnavailable(msg) => write!(f, "Chat provider unavailable: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Rejected(msg) => write!(f, "Rejected by chat provider: {}", msg),
        }
    }
}

impl std::error::Error for ConnectorError {}

impl ResponseError for ConnectorError {
    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::HttpError(_) => "Chat provider error",
            Self::ServiceUnavailable(_) => "Chat provider unavailable",
            Self::Unauthorized(_) => "Chat provider refused credentials",
            Self::NotFound(_) => "Chat provider resource not found",
            Self::Rejected(_) => "Chat provider rejected the request",
        };

        HttpResponse::build(self.status_code()).json(json!({
            "status": "Error",
            "code": self.status_code().as_u16(),
            "message": message,
            "details": self.to_string(),
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::HttpError(_) => StatusCode::BAD_GATEWAY,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            // our credentials, not the caller's
            Self::Unauthorized(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<reqwest::Error> for ConnectorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::ServiceUnavailable(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            Self::ServiceUnavailable(format!("Connection failed: {}", err))
        } else {
            Self::HttpError(err.to_string())
        }
    }
}
