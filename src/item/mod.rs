//! Workshop item handle
//!
//! A [`WorkshopItem`] is bound to one published file. Its metadata is
//! fetched when the handle is created and never again; the creator profile
//! and the file bytes are fetched on first use and cached for the lifetime of
//! the handle. A failed lazy fetch is cached as well, so no accessor ever
//! issues the same request twice unless [`WorkshopItem::clear_cache`] is
//! called.

use crate::client::WorkshopClient;
use crate::error::{RemoteDataError, Result};
use crate::types::{CreatorProfile, FetchState, PublishedFileId, WorkshopDetails};
use crate::utils::file_name_of;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Handle to a single Steam Workshop item
#[derive(Debug)]
pub struct WorkshopItem {
    client: WorkshopClient,
    details: WorkshopDetails,
    author: FetchState<CreatorProfile>,
    content: FetchState<Vec<u8>>,
}

impl WorkshopItem {
    /// Fetch metadata and build the handle; no handle exists if this fails
    pub(crate) fn fetch(client: WorkshopClient, id: PublishedFileId) -> Result<Self> {
        let details = client.published_file_details(id)?;
        debug!(item_id = %id, title = %details.title, "fetched workshop item details");
        Ok(Self::from_details(client, details))
    }

    /// Build a handle from already-fetched details
    pub fn from_details(client: WorkshopClient, details: WorkshopDetails) -> Self {
        Self {
            client,
            details,
            author: FetchState::Unfetched,
            content: FetchState::Unfetched,
        }
    }

    /// The full validated metadata record
    pub fn details(&self) -> &WorkshopDetails {
        &self.details
    }

    /// Item ID
    pub fn id(&self) -> PublishedFileId {
        self.details.id
    }

    /// Creator SteamID64
    pub fn creator_id(&self) -> u64 {
        self.details.creator
    }

    /// Creator's Steam Community profile URL
    pub fn creator_url(&self) -> String {
        self.client.profile_url(self.details.creator)
    }

    /// App the item belongs to
    pub fn app_id(&self) -> u32 {
        self.details.app_id
    }

    /// File size in bytes as reported by Steam
    pub fn file_size(&self) -> u64 {
        self.details.file_size
    }

    /// File name without the directories Steam stores it under
    pub fn filename(&self) -> &str {
        self.details
            .filename
            .rsplit('/')
            .next()
            .unwrap_or(&self.details.filename)
    }

    /// Direct download URL
    pub fn file_url(&self) -> Option<&str> {
        self.details.file_url.as_deref()
    }

    /// Preview image URL
    pub fn preview_url(&self) -> Option<&str> {
        self.details.preview_url.as_deref()
    }

    /// Title
    pub fn title(&self) -> &str {
        &self.details.title
    }

    /// Description, `None` when the creator left it empty
    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    /// Creation time
    pub fn time_created(&self) -> DateTime<Utc> {
        self.details.time_created
    }

    /// Last update time
    pub fn time_updated(&self) -> DateTime<Utc> {
        self.details.time_updated
    }

    /// Tags in Steam's order
    pub fn tags(&self) -> &[String] {
        &self.details.tags
    }

    /// View count
    pub fn views(&self) -> u64 {
        self.details.views
    }

    /// Follower count
    pub fn followers(&self) -> u64 {
        self.details.followers
    }

    /// Subscription count
    pub fn subscriptions(&self) -> u64 {
        self.details.subscriptions
    }

    /// Creator profile, fetched on first call
    ///
    /// Returns `None` if the lookup failed or Steam listed no player.
    pub fn creator_profile(&mut self) -> Option<&CreatorProfile> {
        if !self.author.is_settled() {
            let steam_id = self.details.creator;
            let profile = match self.client.player_summary(steam_id) {
                Ok(Some(profile)) => Some(profile),
                Ok(None) => {
                    warn!(item_id = %self.details.id, steam_id, "no player record for creator");
                    None
                }
                Err(e) => {
                    warn!(item_id = %self.details.id, steam_id, error = %e, "creator lookup failed");
                    None
                }
            };
            self.author = FetchState::from_option(profile);
        } else {
            debug!(item_id = %self.details.id, "creator profile served from cache");
        }
        self.author.value()
    }

    /// Creator display name
    ///
    /// # Errors
    /// `RemoteDataError::NoPlayerRecord` if the creator lookup produced no record
    pub fn creator_name(&mut self) -> Result<&str> {
        let steam_id = self.details.creator;
        match self.creator_profile() {
            Some(profile) => Ok(profile.persona_name.as_str()),
            None => Err(RemoteDataError::NoPlayerRecord { steam_id }.into()),
        }
    }

    /// Creator real name, if public
    pub fn creator_real_name(&mut self) -> Option<&str> {
        self.creator_profile()?.real_name.as_deref()
    }

    /// Creator avatar URL
    pub fn creator_avatar(&mut self) -> Option<&str> {
        self.creator_profile()?.avatar_url.as_deref()
    }

    /// File bytes, downloaded on first call
    ///
    /// Returns `None` if the item has no direct file URL or the download
    /// failed; neither is an error.
    pub fn file_content(&mut self) -> Option<&[u8]> {
        if !self.content.is_settled() {
            let Some(url) = self.details.file_url.as_deref() else {
                debug!(item_id = %self.details.id, "item has no direct file URL");
                return None;
            };
            let bytes = self.client.fetch_bytes(url);
            self.content = FetchState::from_option(bytes);
        }
        self.content.value().map(Vec::as_slice)
    }

    /// Save the file into `dir`, creating the directory if needed
    ///
    /// Returns `Ok(false)` without touching the filesystem when there is no
    /// content to save.
    pub fn download(&mut self, dir: impl AsRef<Path>) -> Result<bool> {
        Ok(self.download_to(dir)?.is_some())
    }

    /// Like [`WorkshopItem::download`], returning the written path
    ///
    /// An existing file at the target path is overwritten.
    ///
    /// # Errors
    /// - `RemoteDataError::InvalidField` if the stored filename has no usable
    ///   final segment
    /// - `Error::Io` if the directory or file cannot be written
    pub fn download_to(&mut self, dir: impl AsRef<Path>) -> Result<Option<PathBuf>> {
        let dir = dir.as_ref();
        if self.file_content().is_none() {
            return Ok(None);
        }

        let name = file_name_of(&self.details.filename).ok_or_else(|| {
            RemoteDataError::InvalidField {
                field: "filename",
                reason: format!("{:?} has no usable file name", self.details.filename),
            }
        })?;
        let bytes = self.content.value().map(Vec::as_slice).unwrap_or_default();

        std::fs::create_dir_all(dir)?;
        let target = dir.join(name);
        std::fs::write(&target, bytes)?;

        info!(
            item_id = %self.details.id,
            path = %target.display(),
            bytes = bytes.len(),
            "saved workshop file"
        );
        Ok(Some(target))
    }

    /// Cache state of the creator profile
    pub fn author_state(&self) -> &FetchState<CreatorProfile> {
        &self.author
    }

    /// Cache state of the file bytes
    pub fn content_state(&self) -> &FetchState<Vec<u8>> {
        &self.content
    }

    /// Forget cached creator profile and file bytes so the next access refetches
    pub fn clear_cache(&mut self) {
        self.author = FetchState::Unfetched;
        self.content = FetchState::Unfetched;
    }
}
