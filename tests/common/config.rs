//! Test configuration helpers for loading .env credentials and creating clients

use workshop_dl::{Config, WorkshopClient};

/// Error type for test configuration
#[derive(Debug)]
pub struct ConfigError(pub String);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Config error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

/// Load the live Steam configuration from the environment
///
/// Required environment variables:
/// - `STEAM_API_KEY` - Steam Web API key
pub fn load_live_config() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    if config.api_key().is_none() {
        return Err(ConfigError(
            "STEAM_API_KEY not set in environment".to_string(),
        ));
    }
    Ok(config)
}

/// Check whether live credentials are available
pub fn has_live_credentials() -> bool {
    load_live_config().is_ok()
}

/// Client pointed at a mock server
pub fn mock_client(uri: &str) -> WorkshopClient {
    WorkshopClient::new(Config {
        api_base_url: uri.to_string(),
        ..Config::new("TESTKEY")
    })
    .expect("Failed to create client")
}

/// Run blocking client code off the async test runtime
pub async fn blocking<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}
