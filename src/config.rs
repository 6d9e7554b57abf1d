//! Configuration types for workshop-dl

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Environment variable holding the Steam Web API key
pub const ENV_API_KEY: &str = "STEAM_API_KEY";
/// Environment variable overriding [`Config::api_base_url`]
pub const ENV_API_BASE_URL: &str = "STEAM_API_BASE_URL";
/// Environment variable overriding [`Config::community_base_url`]
pub const ENV_COMMUNITY_BASE_URL: &str = "STEAM_COMMUNITY_BASE_URL";

/// Client configuration
///
/// One configuration carries exactly one API key; every request issued by a
/// [`WorkshopClient`](crate::WorkshopClient) built from it uses that key.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Steam Web API key (required; the client refuses to start without it)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the Steam Web API (default: "https://api.steampowered.com")
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the Steam Community site, used for creator profile links
    /// (default: "https://steamcommunity.com")
    #[serde(default = "default_community_base_url")]
    pub community_base_url: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout (None = no explicit timeout)
    #[serde(default, with = "optional_duration_serde")]
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: default_api_base_url(),
            community_base_url: default_community_base_url(),
            user_agent: default_user_agent(),
            timeout: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("community_base_url", &self.community_base_url)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Default configuration with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Build a configuration from `STEAM_API_KEY` and the optional
    /// `STEAM_API_BASE_URL` / `STEAM_COMMUNITY_BASE_URL` overrides.
    ///
    /// A missing key is not an error here; [`Config::validate`] reports it.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            api_key: lookup(ENV_API_KEY),
            ..Default::default()
        };
        if let Some(base) = lookup(ENV_API_BASE_URL) {
            config.api_base_url = base;
        }
        if let Some(base) = lookup(ENV_COMMUNITY_BASE_URL) {
            config.community_base_url = base;
        }
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The configured API key, if non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Check that the configuration can be used to issue requests
    ///
    /// # Errors
    /// - `Error::Config` with key `api_key` if no key is set
    /// - `Error::Config` with key `api_base_url` / `community_base_url` if a
    ///   base URL does not parse
    pub fn validate(&self) -> Result<()> {
        if self.api_key().is_none() {
            return Err(Error::config(
                "Steam API key is not set; configure it before creating a client",
                "api_key",
            ));
        }
        if let Err(e) = Url::parse(&self.api_base_url) {
            return Err(Error::config(
                format!("invalid API base URL {}: {}", self.api_base_url, e),
                "api_base_url",
            ));
        }
        if let Err(e) = Url::parse(&self.community_base_url) {
            return Err(Error::config(
                format!(
                    "invalid community base URL {}: {}",
                    self.community_base_url, e
                ),
                "community_base_url",
            ));
        }
        Ok(())
    }
}

fn default_api_base_url() -> String {
    "https://api.steampowered.com".to_string()
}

fn default_community_base_url() -> String {
    "https://steamcommunity.com".to_string()
}

fn default_user_agent() -> String {
    concat!("workshop-dl/", env!("CARGO_PKG_VERSION")).to_string()
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
