//! Sequential download of several Workshop items into one directory

use crate::client::WorkshopClient;
use crate::error::Error;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What happened to one URL of a batch
#[derive(Debug)]
pub enum BatchStatus {
    /// The file was written to this path
    Saved(PathBuf),
    /// The item exists but has no downloadable content
    NoContent,
    /// The item could not be opened or written
    Failed(Error),
}

/// Outcome of one URL of a batch
#[derive(Debug)]
pub struct BatchOutcome {
    /// URL as supplied by the caller
    pub url: String,
    /// Item title, when metadata was fetched
    pub title: Option<String>,
    /// Result of the download
    pub status: BatchStatus,
}

impl BatchOutcome {
    /// Whether the file was written
    pub fn is_saved(&self) -> bool {
        matches!(self.status, BatchStatus::Saved(_))
    }
}

impl WorkshopClient {
    /// Download every item in `urls` into `dir`, in order
    ///
    /// One failing URL never aborts the batch; each outcome is reported in
    /// the returned list, in input order.
    pub fn download_all<I, S>(&self, urls: I, dir: impl AsRef<Path>) -> Vec<BatchOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dir = dir.as_ref();
        urls.into_iter()
            .map(|url| self.download_one(url.as_ref(), dir))
            .collect()
    }

    fn download_one(&self, url: &str, dir: &Path) -> BatchOutcome {
        let mut item = match self.item(url) {
            Ok(item) => item,
            Err(e) => {
                warn!(url, error = %e, "skipping workshop item");
                return BatchOutcome {
                    url: url.to_string(),
                    title: None,
                    status: BatchStatus::Failed(e),
                };
            }
        };

        let title = item.title().to_string();
        info!(item_id = %item.id(), title = %title, "downloading workshop item");

        let status = match item.download_to(dir) {
            Ok(Some(path)) => BatchStatus::Saved(path),
            Ok(None) => {
                warn!(item_id = %item.id(), "workshop item has no downloadable content");
                BatchStatus::NoContent
            }
            Err(e) => {
                warn!(item_id = %item.id(), error = %e, "failed to save workshop item");
                BatchStatus::Failed(e)
            }
        };

        BatchOutcome {
            url: url.to_string(),
            title: Some(title),
            status,
        }
    }
}
