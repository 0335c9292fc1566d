//! External Service Connectors
//!
//! Adapters for services we call out to. Routes receive a trait object
//! (`web::Data<Arc<dyn ChatProviderConnector>>`) and never see the HTTP
//! client, so tests swap in the mock.

pub mod chat_provider;
pub mod errors;

pub use chat_provider::{ChatProviderClient, ChatProviderConnector};
pub use errors::ConnectorError;
