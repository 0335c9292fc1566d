#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    pub chat_provider: ChatProviderSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ChatProviderSettings {
    /// e.g. https://chat.example.com/api
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    /// Where the provider posts notifications, i.e. our `/chat/notifications`
    pub callback_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Shared secret for the `X-Chat-Signature` header; unset disables the check
    #[serde(default)]
    pub webhook_secret: Option<String>,
}

fn default_timeout_secs() -> u64 {
    10
}

impl ChatProviderSettings {
    /// Secrets usually come from the environment rather than the yaml file.
    pub fn apply_env(&mut self) {
        if let Ok(api_key) = std::env::var("CHAT_PROVIDER_API_KEY") {
            self.api_key = api_key;
        }
        if let Ok(secret) = std::env::var("CHAT_WEBHOOK_SECRET") {
            self.webhook_secret = Some(secret).filter(|s| !s.is_empty());
        }
    }
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // configuration.yaml in the working directory, then APP__* overrides,
    // e.g. APP__DATABASE__HOST=db
    settings.merge(config::File::with_name("configuration"))?;
    settings.merge(config::Environment::with_prefix("APP").separator("__"))?;

    let mut config: Settings = settings.try_deserialize()?;
    config.chat_provider.apply_env();

    Ok(config)
}
