//! Grouping of heterogeneous store records by canonical key.

use std::collections::HashMap;

use glowdex_core::RawListing;

use crate::key::{build_key, CanonicalKey};

/// Canonical-key buckets over one batch of listings.
///
/// Every listing belongs to exactly one bucket and buckets are never
/// empty. Buckets remember first-seen order so downstream sorts break
/// ties deterministically on input order; listings inside a bucket keep
/// their input order (stable, unsorted at this stage).
#[derive(Debug, Default)]
pub struct ProductBuckets {
    index: HashMap<String, usize>,
    entries: Vec<(CanonicalKey, Vec<RawListing>)>,
}

impl ProductBuckets {
    /// Number of distinct canonical products in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up one bucket by its canonical key string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[RawListing]> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Buckets in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &[RawListing])> {
        self.entries
            .iter()
            .map(|(key, members)| (key, members.as_slice()))
    }
}

/// Group a merged batch by canonical key in a single O(n) pass.
#[must_use]
pub fn bucketize(listings: Vec<RawListing>) -> ProductBuckets {
    let listing_count = listings.len();
    let mut buckets = ProductBuckets::default();

    for listing in listings {
        let key = build_key(&listing);
        match buckets.index.get(key.as_str()) {
            Some(&position) => buckets.entries[position].1.push(listing),
            None => {
                buckets
                    .index
                    .insert(key.as_str().to_string(), buckets.entries.len());
                buckets.entries.push((key, vec![listing]));
            }
        }
    }

    tracing::debug!(
        listings = listing_count,
        buckets = buckets.len(),
        "bucketized batch"
    );
    buckets
}
