//! Core types: item identifiers, Steam wire records, and cache state

use crate::error::RemoteDataError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Steam `EResult` code for success
pub const RESULT_OK: i64 = 1;

/// Unique identifier of a published Workshop file
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishedFileId(pub u64);

impl PublishedFileId {
    /// Create a new PublishedFileId
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner u64 value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PublishedFileId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<PublishedFileId> for u64 {
    fn from(id: PublishedFileId) -> Self {
        id.0
    }
}

impl PartialEq<u64> for PublishedFileId {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

impl std::fmt::Display for PublishedFileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cache state of a lazily fetched value
///
/// `Failed` is terminal until the owner explicitly resets the state; a failed
/// fetch is never retried implicitly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FetchState<T> {
    /// No request has been issued yet
    #[default]
    Unfetched,
    /// The request succeeded and produced a value
    Fetched(T),
    /// The request was issued and produced nothing usable
    Failed,
}

impl<T> FetchState<T> {
    /// Build a settled state from a fetch outcome
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => FetchState::Fetched(v),
            None => FetchState::Failed,
        }
    }

    /// Whether a request has already been issued for this value
    pub fn is_settled(&self) -> bool {
        !matches!(self, FetchState::Unfetched)
    }

    /// Whether the last fetch failed
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed)
    }

    /// The cached value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Fetched(v) => Some(v),
            _ => None,
        }
    }
}

/// Validated published-file details for one Workshop item
///
/// Decoded once from the `GetDetails` response; every required field is
/// guaranteed present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkshopDetails {
    /// Item ID
    pub id: PublishedFileId,
    /// Creator SteamID64
    pub creator: u64,
    /// App the item belongs to
    pub app_id: u32,
    /// Size of the primary file in bytes
    pub file_size: u64,
    /// Stored path of the primary file (may contain directories)
    pub filename: String,
    /// Direct download URL; absent for items without a downloadable file
    pub file_url: Option<String>,
    /// Preview image URL
    pub preview_url: Option<String>,
    /// Item title
    pub title: String,
    /// Item description; an empty description is stored as `None`
    pub description: Option<String>,
    /// Creation time
    pub time_created: DateTime<Utc>,
    /// Last update time
    pub time_updated: DateTime<Utc>,
    /// Tags in the order Steam returns them
    pub tags: Vec<String>,
    /// View count
    pub views: u64,
    /// Follower count
    pub followers: u64,
    /// Subscription count
    pub subscriptions: u64,
}

/// Public profile data of a Workshop item creator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorProfile {
    /// Display name
    #[serde(rename = "personaname")]
    pub persona_name: String,
    /// Real name, only present when the profile exposes it
    #[serde(rename = "realname", default)]
    pub real_name: Option<String>,
    /// Full-size avatar URL
    #[serde(rename = "avatarfull", default)]
    pub avatar_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Wire records
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsEnvelope {
    pub response: DetailsList,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailsList {
    #[serde(default)]
    pub publishedfiledetails: Vec<RawPublishedFile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTag {
    pub tag: String,
}

/// `publishedfiledetails[n]` exactly as sent; 64-bit counters may be strings
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawPublishedFile {
    #[serde(default)]
    pub result: Option<i64>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub creator: Option<u64>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub creator_appid: Option<u64>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub file_description: Option<String>,
    #[serde(default)]
    pub time_created: Option<i64>,
    #[serde(default)]
    pub time_updated: Option<i64>,
    #[serde(default)]
    pub tags: Vec<RawTag>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub views: Option<u64>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub followers: Option<u64>,
    #[serde(default, deserialize_with = "flexible_u64")]
    pub subscriptions: Option<u64>,
}

impl RawPublishedFile {
    /// Check the result code and required fields, producing the typed record
    pub(crate) fn validate(self, id: PublishedFileId) -> Result<WorkshopDetails, RemoteDataError> {
        let result = self.result.ok_or(RemoteDataError::MissingField { field: "result" })?;
        if result != RESULT_OK {
            return Err(RemoteDataError::ResultStatus { id: id.get(), result });
        }

        let app_id = required(self.creator_appid, "creator_appid")?;
        let app_id = u32::try_from(app_id).map_err(|_| RemoteDataError::InvalidField {
            field: "creator_appid",
            reason: format!("{app_id} does not fit an app ID"),
        })?;

        Ok(WorkshopDetails {
            id,
            creator: required(self.creator, "creator")?,
            app_id,
            file_size: required(self.file_size, "file_size")?,
            filename: required(self.filename, "filename")?,
            file_url: non_empty(self.file_url),
            preview_url: non_empty(self.preview_url),
            title: required(self.title, "title")?,
            description: non_empty(self.file_description),
            time_created: timestamp(self.time_created, "time_created")?,
            time_updated: timestamp(self.time_updated, "time_updated")?,
            tags: self.tags.into_iter().map(|t| t.tag).collect(),
            views: required(self.views, "views")?,
            followers: required(self.followers, "followers")?,
            subscriptions: required(self.subscriptions, "subscriptions")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayersEnvelope {
    pub response: PlayersList,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlayersList {
    #[serde(default)]
    pub players: Vec<CreatorProfile>,
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T, RemoteDataError> {
    value.ok_or(RemoteDataError::MissingField { field })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn timestamp(value: Option<i64>, field: &'static str) -> Result<DateTime<Utc>, RemoteDataError> {
    let secs = required(value, field)?;
    DateTime::from_timestamp(secs, 0).ok_or_else(|| RemoteDataError::InvalidField {
        field,
        reason: format!("{secs} is not a representable timestamp"),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

fn flexible_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
