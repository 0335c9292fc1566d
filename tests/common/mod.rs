use chatbridge::configuration::{get_configuration, DatabaseSettings, Settings};
use sqlx::{Connection, Executor, PgConnection, PgPool};

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

pub async fn spawn_app_with_configuration(mut configuration: Settings) -> Option<TestApp> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    configuration.database.database_name = uuid::Uuid::new_v4().to_string();

    let connection_pool = match configure_database(&configuration.database).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    let server = chatbridge::startup::run(listener, connection_pool.clone(), configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    Some(TestApp {
        address,
        db_pool: connection_pool,
    })
}

/// Spawns the server with the chat provider pointed at `provider_url`.
pub async fn spawn_app(provider_url: &str) -> Option<TestApp> {
    let mut configuration = get_configuration().expect("Failed to get configuration");
    configuration.chat_provider.base_url = provider_url.to_string();
    configuration.chat_provider.webhook_secret = None;

    spawn_app_with_configuration(configuration).await
}

pub async fn configure_database(config: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let mut connection = PgConnection::connect(&config.connection_string_without_db()).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.database_name).as_str())
        .await?;

    let connection_pool = PgPool::connect(&config.connection_string()).await?;

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    Ok(connection_pool)
}

#[allow(dead_code)]
pub fn chat_message_notification(kind: &str, sender_is_supply: bool, text: &str) -> serde_json::Value {
    serde_json::json!({
        "type": kind,
        "timestamp": 1700000000,
        "payload": {
            "id": "msg-1",
            "type": "TEXT",
            "data": {"text": text},
            "sender": {"id": "buyer-1", "is_supply": sender_is_supply},
            "receiver": {"id": "seller-1", "is_supply": !sender_is_supply},
            "metadata": {"title": "Bike", "category": "sports", "post_token": "wX1y"},
            "sent_at": 1699999990
        }
    })
}
