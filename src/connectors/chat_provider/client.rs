use super::ChatProviderConnector;
use crate::configuration::ChatProviderSettings;
use crate::connectors::ConnectorError;
use crate::models::StartChatSessionRequest;
use async_trait::async_trait;
use std::time::Duration;
use tracing::Instrument;

/// HTTP implementation of [`ChatProviderConnector`]
pub struct ChatProviderClient {
    base_url: String,
    api_key: String,
    http_client: reqwest::Client,
}

impl ChatProviderClient {
    pub fn new(settings: &ChatProviderSettings) -> Result<Self, ConnectorError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| ConnectorError::HttpError(format!("Failed to create HTTP client: {}", err)))?;

        Ok(Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            http_client,
        })
    }
}

#[async_trait]
impl ChatProviderConnector for ChatProviderClient {
    async fn start_session(&self, request: &StartChatSessionRequest) -> Result<(), ConnectorError> {
        let span = tracing::info_span!(
            "chat_provider_start_session",
            post_token = %request.post_token,
            user_id = %request.user_id,
            peer_id = %request.peer_id
        );
        let url = format!("{}/chat/sessions", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .instrument(span.clone())
            .await?;

        let status = response.status();
        match status.as_u16() {
            200..=299 => {
                tracing::info!(parent: &span, "Chat session started");
                Ok(())
            }
            400 | 422 => {
                let body = response.text().await.unwrap_or_default();
                Err(ConnectorError::Rejected(body))
            }
            401 | 403 => Err(ConnectorError::Unauthorized(
                "Chat provider refused the API key".to_string(),
            )),
            404 => Err(ConnectorError::NotFound(format!("{} not found", url))),
            500..=599 => {
                tracing::warn!(parent: &span, "Chat provider returned {}", status);
                Err(ConnectorError::ServiceUnavailable(format!(
                    "Chat provider returned {}",
                    status
                )))
            }
            other => Err(ConnectorError::HttpError(format!(
                "Unexpected status code: {}",
                other
            ))),
        }
    }
}
