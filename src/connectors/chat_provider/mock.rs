use super::ChatProviderConnector;
use crate::connectors::ConnectorError;
use crate::models::StartChatSessionRequest;
use async_trait::async_trait;
use std::sync::Mutex;

/// Records every session request; fails them all when `unavailable` is set.
#[derive(Default)]
pub struct MockChatProviderConnector {
    pub unavailable: bool,
    pub requests: Mutex<Vec<StartChatSessionRequest>>,
}

#[async_trait]
impl ChatProviderConnector for MockChatProviderConnector {
    async fn start_session(&self, request: &StartChatSessionRequest) -> Result<(), ConnectorError> {
        if self.unavailable {
            return Err(ConnectorError::ServiceUnavailable("mock provider is down".to_string()));
        }
        self.requests.lock().unwrap().push(request.clone());
        Ok(())
    }
}
