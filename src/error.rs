//! Error types for workshop-dl
//!
//! This module provides the error taxonomy for the library:
//! - Configuration errors, raised before any network traffic
//! - Remote data errors for failed, empty, or malformed Steam responses
//! - Transport and filesystem errors wrapped from their source crates
//!
//! Conditions that are legitimate states of a Workshop item (no direct
//! file, private profile, CDN hiccup) are not errors at all; accessors
//! model them as `Option` values.

use thiserror::Error;

/// Result type alias for workshop-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for workshop-dl
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "api_key")
        key: Option<String>,
    },

    /// The supplied Workshop URL does not carry a usable item ID
    #[error("invalid workshop URL {url:?}: {reason}")]
    InvalidUrl {
        /// The URL as supplied by the caller
        url: String,
        /// Why the item ID could not be extracted
        reason: String,
    },

    /// Steam returned no data, a failure status, or a malformed record
    #[error("remote data error: {0}")]
    RemoteData(#[from] RemoteDataError),

    /// HTTP client construction or transport error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL building error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors describing unusable responses from the Steam Web API
#[derive(Debug, Error)]
pub enum RemoteDataError {
    /// The endpoint was unreachable or answered with a non-200 status
    #[error("no data received from {endpoint}; check that the API key is correct")]
    EmptyResponse {
        /// Short endpoint name (e.g., "GetDetails")
        endpoint: &'static str,
    },

    /// The published-file record reported a non-success result code
    #[error("item {id} returned result code {result}; check that the item ID is correct")]
    ResultStatus {
        /// The requested item ID
        id: u64,
        /// Steam `EResult` code (1 = OK)
        result: i64,
    },

    /// The response body was not the JSON shape the endpoint documents
    #[error("malformed response from {endpoint}: {reason}")]
    Malformed {
        /// Short endpoint name
        endpoint: &'static str,
        /// Decoder message
        reason: String,
    },

    /// A required field was absent from an otherwise successful record
    #[error("required field `{field}` missing from published file details")]
    MissingField {
        /// The missing JSON key
        field: &'static str,
    },

    /// A field was present but its value is unusable
    #[error("field `{field}` has an invalid value: {reason}")]
    InvalidField {
        /// The offending JSON key
        field: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// The player summaries lookup produced no record for the creator
    #[error("no player record available for creator {steam_id}")]
    NoPlayerRecord {
        /// Creator SteamID64
        steam_id: u64,
    },
}

impl Error {
    /// Create a configuration error for a specific key
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }

    /// Machine-readable error code, stable across releases
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::Config { .. } => "config_error",
            Error::InvalidUrl { .. } => "invalid_url",
            Error::RemoteData(e) => match e {
                RemoteDataError::EmptyResponse { .. } => "empty_response",
                RemoteDataError::ResultStatus { .. } => "result_status",
                RemoteDataError::Malformed { .. } => "malformed_response",
                RemoteDataError::MissingField { .. } => "missing_field",
                RemoteDataError::InvalidField { .. } => "invalid_field",
                RemoteDataError::NoPlayerRecord { .. } => "no_player_record",
            },
            Error::Network(_) => "network_error",
            Error::Url(_) => "url_error",
            Error::Io(_) => "io_error",
        }
    }

    /// Whether this error is a [`RemoteDataError`]
    pub fn is_remote_data(&self) -> bool {
        matches!(self, Error::RemoteData(_))
    }

    /// Whether this error is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}
