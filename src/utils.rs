//! Utility functions for Workshop URLs and file paths

use crate::error::{Error, Result};
use crate::types::PublishedFileId;

/// Extract the Workshop item ID from a URL's `id=` query parameter
///
/// The value is the text between `id=` and the next `&` (or the end of the
/// string) and must be a non-empty run of ASCII digits. A bare query string
/// such as `id=123` is accepted too.
///
/// The query is everything after the first `?`. A later `?` is not a
/// separator, so `?foo=bar?id=5` has no `id` parameter and is rejected.
///
/// # Examples
///
/// ```
/// use workshop_dl::utils::parse_item_id;
///
/// let id = parse_item_id(
///     "https://steamcommunity.com/sharedfiles/filedetails/?id=2934902806&searchtext=",
/// )
/// .unwrap();
/// assert_eq!(id.get(), 2934902806);
/// ```
pub fn parse_item_id(url: &str) -> Result<PublishedFileId> {
    let invalid = |reason: &str| Error::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let without_fragment = url.split('#').next().unwrap_or(url);
    let query = match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None => without_fragment,
    };

    let value = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("id="))
        .ok_or_else(|| invalid("missing `id` query parameter"))?;

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid("`id` is not a decimal number"));
    }

    value
        .parse::<u64>()
        .map(PublishedFileId::new)
        .map_err(|_| invalid("`id` is out of range"))
}

/// Last `/`-separated segment of a stored Workshop filename
///
/// Returns `None` when the segment is empty or a relative path component, so
/// the result is always safe to join onto a target directory.
pub fn file_name_of(filename: &str) -> Option<&str> {
    let name = filename.rsplit('/').next().unwrap_or(filename);
    match name {
        "" | "." | ".." => None,
        name if name.contains('\\') => None,
        name => Some(name),
    }
}

/// Community profile URL for a SteamID64
pub fn profile_url(community_base_url: &str, steam_id: u64) -> String {
    format!(
        "{}/profiles/{}",
        community_base_url.trim_end_matches('/'),
        steam_id
    )
}
