//! # workshop-dl
//!
//! Client library for Steam Workshop items: metadata through the Steam Web
//! API, file payloads through the Workshop CDN.
//!
//! ## Design Philosophy
//!
//! workshop-dl is designed to be:
//! - **Explicit** - The API key lives in a [`Config`], not in global state
//! - **Lazy** - Creator profiles and file bytes are fetched on first use, once
//! - **Typed** - Steam's JSON is decoded and validated once, at the boundary
//! - **Blocking** - Plain synchronous calls; no async runtime required
//!
//! ## Quick Start
//!
//! ```no_run
//! use workshop_dl::{Config, WorkshopClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WorkshopClient::new(Config::new("YOUR STEAM API KEY"))?;
//!
//!     let mut item =
//!         client.item("https://steamcommunity.com/sharedfiles/filedetails/?id=2934902806")?;
//!     let creator = item.creator_name()?.to_string();
//!     println!("{} by {}", item.title(), creator);
//!
//!     if item.download("downloads")? {
//!         println!("saved {}", item.filename());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Batch downloads
pub mod batch;
/// Steam Web API client
pub mod client;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Workshop item handle
pub mod item;
/// Core types and wire records
pub mod types;
/// Utility functions
pub mod utils;

#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used types
pub use batch::{BatchOutcome, BatchStatus};
pub use client::WorkshopClient;
pub use config::Config;
pub use error::{Error, RemoteDataError, Result};
pub use item::WorkshopItem;
pub use types::{CreatorProfile, FetchState, PublishedFileId, WorkshopDetails};
