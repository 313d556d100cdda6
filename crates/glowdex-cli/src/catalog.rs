//! Merging of per-store feed snapshots into one batch.
//!
//! The engine assumes a single, already-merged, read-only input list;
//! partial fetch failure is this layer's responsibility. A store whose
//! snapshot cannot be loaded is skipped with a warning, and only a run
//! where every store fails is an error.

use std::path::Path;

use glowdex_core::{load_feed, RawListing, StoresFile};

/// Load every configured feed and concatenate the listings.
///
/// Relative feed paths resolve against the registry file's directory.
///
/// # Errors
///
/// Returns an error only when every configured store fails to load.
pub fn load_catalog(config_path: &Path, stores: &StoresFile) -> anyhow::Result<Vec<RawListing>> {
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    let mut merged = Vec::new();
    let mut failed_stores = 0usize;

    for store in &stores.stores {
        let slug = store.slug();
        let path = if store.feed.is_absolute() {
            store.feed.clone()
        } else {
            base.join(&store.feed)
        };

        match load_feed(&path, &slug) {
            Ok(mut listings) => {
                tracing::info!(store = %slug, listings = listings.len(), "loaded feed");
                merged.append(&mut listings);
            }
            Err(err) => {
                tracing::warn!(store = %slug, error = %err, "skipping store — feed failed to load");
                failed_stores += 1;
            }
        }
    }

    if failed_stores > 0 {
        tracing::warn!(
            failed_stores,
            total_stores = stores.stores.len(),
            "some stores failed to load"
        );
    }

    if !stores.stores.is_empty() && failed_stores == stores.stores.len() {
        anyhow::bail!("all {failed_stores} stores failed to load");
    }

    Ok(merged)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
