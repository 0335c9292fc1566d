use crate::configuration::Settings;
use crate::connectors::{ChatProviderClient, ChatProviderConnector};
use crate::db::{ChatStore, PgChatStore};
use crate::helpers::JsonError;
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

/// Extractor config that answers malformed JSON bodies with the error envelope.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| JsonError::bad_request(format!("Malformed request: {}", err)))
}

pub async fn run(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let chat_store: Arc<dyn ChatStore> = Arc::new(PgChatStore::new(pg_pool));
    let chat_store = web::Data::new(chat_store);

    let chat_provider = ChatProviderClient::new(&settings.chat_provider)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))?;
    let chat_provider: Arc<dyn ChatProviderConnector> = Arc::new(chat_provider);
    let chat_provider = web::Data::new(chat_provider);

    let provider_settings = web::Data::new(settings.chat_provider.clone());

    if provider_settings.webhook_secret.is_none() {
        tracing::warn!("No webhook secret configured, notification signatures are not checked");
    }

    let json_config = json_config();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/chat")
                    .service(routes::chat::notification_handler)
                    .service(routes::chat::event_handler)
                    .service(routes::chat::session_handler)
                    .service(routes::chat::chat_bot_messages_handler)
                    .service(routes::chat::chat_messages_handler),
            )
            .app_data(json_config.clone())
            .app_data(chat_store.clone())
            .app_data(chat_provider.clone())
            .app_data(provider_settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
