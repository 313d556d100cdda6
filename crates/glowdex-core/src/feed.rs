//! Feed snapshot ingestion.
//!
//! A snapshot is the JSON array a store's fetcher wrote to disk on its
//! last run. Fetching is not this crate's concern; by the time glowdex
//! sees a feed it is a local file.

use std::path::Path;

use crate::{FeedError, RawListing};

/// Load one store's feed snapshot from disk.
///
/// Records that arrive without a store identifier are stamped with
/// `store` (the registry slug) so every listing downstream knows where
/// its offer lives.
///
/// # Errors
///
/// Returns [`FeedError::Io`] if the file cannot be read and
/// [`FeedError::Parse`] if the document is not an array of listing
/// objects. Per-record field problems do not error; they degrade locally
/// during [`RawListing`] deserialization.
pub fn load_feed(path: &Path, store: &str) -> Result<Vec<RawListing>, FeedError> {
    let content = std::fs::read_to_string(path).map_err(|e| FeedError::Io {
        store: store.to_string(),
        path: path.display().to_string(),
        source: e,
    })?;
    parse_feed(&content, store)
}

/// Parse a feed snapshot from an in-memory string.
///
/// Decoupled from file I/O so the parsing contract is testable without
/// touching the filesystem, in the same way the registry loader separates
/// lookup from validation.
///
/// # Errors
///
/// Returns [`FeedError::Parse`] if the document is not a JSON array of
/// objects.
pub fn parse_feed(content: &str, store: &str) -> Result<Vec<RawListing>, FeedError> {
    let mut listings: Vec<RawListing> =
        serde_json::from_str(content).map_err(|e| FeedError::Parse {
            store: store.to_string(),
            source: e,
        })?;

    for listing in &mut listings {
        if listing.store.is_empty() {
            listing.store = store.to_string();
        }
    }

    Ok(listings)
}
