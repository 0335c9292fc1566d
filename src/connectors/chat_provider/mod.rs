//! Chat provider connector
//!
//! Opens chat sessions on the provider so that it starts pushing
//! notifications for a post to our webhook.

use crate::connectors::ConnectorError;
use crate::models::StartChatSessionRequest;
use async_trait::async_trait;

pub mod client;
#[cfg(test)]
pub mod mock;

pub use client::ChatProviderClient;
#[cfg(test)]
pub use mock::MockChatProviderConnector;

#[async_trait]
pub trait ChatProviderConnector: Send + Sync {
    async fn start_session(&self, request: &StartChatSessionRequest) -> Result<(), ConnectorError>;
}
