//! Distinct raw categories across a batch, for filter menus.

use std::collections::HashSet;

use glowdex_core::RawListing;

use crate::normalize::normalize;

/// Deduplicate the raw category strings of a batch.
///
/// Dedup is case- and accent-insensitive (normalized form), but the
/// returned entries preserve the first-seen casing and first-seen order —
/// `["Maquillaje", "maquillaje", "MAQUILLAJE"]` reduces to
/// `["Maquillaje"]`.
#[must_use]
pub fn distinct_categories(listings: &[RawListing]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();

    for listing in listings {
        let Some(raw) = listing.category.as_deref() else {
            continue;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(normalize(trimmed)) {
            categories.push(trimmed.to_string());
        }
    }

    categories
}
