//! Blocking Steam Web API client
//!
//! [`WorkshopClient`] owns the HTTP connection pool and the API key. It knows
//! the three remote endpoints this crate talks to:
//! - `IPublishedFileService/GetDetails` for item metadata
//! - `ISteamUser/GetPlayerSummaries` for creator profiles
//! - the Workshop CDN `file_url` for raw file bytes
//!
//! Every request goes through one primitive, [`WorkshopClient::fetch_json`],
//! which never turns a non-200 status into an error: callers decide what an
//! empty result means for them.

use crate::config::Config;
use crate::error::{Error, RemoteDataError, Result};
use crate::item::WorkshopItem;
use crate::types::{
    CreatorProfile, DetailsEnvelope, PlayersEnvelope, PublishedFileId, WorkshopDetails,
};
use crate::utils::{parse_item_id, profile_url};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

const DETAILS_PATH: &str = "IPublishedFileService/GetDetails/v1/";
const PLAYER_SUMMARIES_PATH: &str = "ISteamUser/GetPlayerSummaries/v2/";

/// Client for Workshop metadata and file downloads
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct WorkshopClient {
    http: reqwest::blocking::Client,
    api_key: String,
    api_base: Url,
    community_base_url: String,
}

impl std::fmt::Debug for WorkshopClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkshopClient")
            .field("api_base", &self.api_base.as_str())
            .field("community_base_url", &self.community_base_url)
            .finish_non_exhaustive()
    }
}

impl WorkshopClient {
    /// Create a client from a configuration
    ///
    /// # Errors
    /// - `Error::Config` if no API key is configured (no request is ever made)
    /// - `Error::Network` if the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let api_key = config
            .api_key()
            .map(str::to_string)
            .ok_or_else(|| Error::config("Steam API key is not set", "api_key"))?;

        // Url::join replaces the last path segment unless the base ends in '/'
        let mut base = config.api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let api_base = Url::parse(&base)?;

        // An unset timeout stays unset instead of falling back to reqwest's default
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        debug!(api_base = %api_base, "created workshop client");

        Ok(Self {
            http,
            api_key,
            api_base,
            community_base_url: config.community_base_url,
        })
    }

    /// Create a client from `STEAM_API_KEY` and related environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env())
    }

    /// Open a handle for the Workshop item a URL points at
    ///
    /// Parses the `id=` parameter and fetches the item's metadata eagerly.
    ///
    /// # Errors
    /// - `Error::InvalidUrl` if the URL carries no numeric `id`
    /// - `Error::RemoteData` if the metadata lookup fails
    pub fn item(&self, url: &str) -> Result<WorkshopItem> {
        let id = parse_item_id(url)?;
        self.item_by_id(id)
    }

    /// Open a handle for a known item ID
    pub fn item_by_id(&self, id: impl Into<PublishedFileId>) -> Result<WorkshopItem> {
        WorkshopItem::fetch(self.clone(), id.into())
    }

    /// Fetch and validate the published-file details of one item
    ///
    /// # Errors
    /// Returns `Error::RemoteData` if the endpoint is unreachable, answers
    /// with a non-200 status, reports a non-success result code, or omits a
    /// required field.
    pub fn published_file_details(&self, id: PublishedFileId) -> Result<WorkshopDetails> {
        let mut url = self.endpoint(DETAILS_PATH)?;
        url.query_pairs_mut()
            .append_pair("publishedfileids[0]", &id.to_string())
            .append_pair("includetags", "true")
            .append_pair("key", &self.api_key);

        let envelope: DetailsEnvelope = self
            .fetch_json("GetDetails", url)?
            .ok_or(RemoteDataError::EmptyResponse {
                endpoint: "GetDetails",
            })?;

        let raw = envelope
            .response
            .publishedfiledetails
            .into_iter()
            .next()
            .ok_or_else(|| RemoteDataError::Malformed {
                endpoint: "GetDetails",
                reason: "response contains no published file details".to_string(),
            })?;

        Ok(raw.validate(id)?)
    }

    /// Look up the public profile of a Steam account
    ///
    /// Returns `Ok(None)` when the endpoint is unreachable, answers with a
    /// non-200 status, or lists no player for the ID.
    pub fn player_summary(&self, steam_id: u64) -> Result<Option<CreatorProfile>> {
        let mut url = self.endpoint(PLAYER_SUMMARIES_PATH)?;
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("steamids", &steam_id.to_string());

        let envelope: Option<PlayersEnvelope> = self.fetch_json("GetPlayerSummaries", url)?;
        Ok(envelope.and_then(|e| e.response.players.into_iter().next()))
    }

    /// Download raw bytes from a Workshop CDN URL
    ///
    /// Any failure (transport error, non-2xx status, truncated body) is logged
    /// as a warning and yields `None`.
    pub fn fetch_bytes(&self, url: &str) -> Option<Vec<u8>> {
        debug!(url, "downloading workshop file");

        let response = match self.http.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e.without_url(), "workshop file request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "workshop file download failed");
            return None;
        }

        match response.bytes() {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                warn!(url, error = %e.without_url(), "failed to read workshop file body");
                None
            }
        }
    }

    /// Issue a GET and decode the JSON body
    ///
    /// Returns `Ok(None)` for anything other than HTTP 200, including transport
    /// failures. A 200 response whose body does not decode as `T` is
    /// `RemoteDataError::Malformed`.
    pub fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<Option<T>> {
        debug!(endpoint, path = url.path(), "Steam API request");

        let response = match self.http.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                warn!(endpoint, error = %e.without_url(), "Steam API request failed");
                return Ok(None);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!(endpoint, status = status.as_u16(), "Steam API returned non-200 status");
            return Ok(None);
        }

        let body = match response.bytes() {
            Ok(body) => body,
            Err(e) => {
                warn!(endpoint, error = %e.without_url(), "failed to read Steam API response");
                return Ok(None);
            }
        };

        serde_json::from_slice(&body).map(Some).map_err(|e| {
            Error::RemoteData(RemoteDataError::Malformed {
                endpoint,
                reason: e.to_string(),
            })
        })
    }

    /// Community profile URL of a Steam account
    pub fn profile_url(&self, steam_id: u64) -> String {
        profile_url(&self.community_base_url, steam_id)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.api_base.join(path)?)
    }
}
