//! The listing-card projection: one summary row per canonical product.

use glowdex_core::RawListing;
use serde::Serialize;

use crate::bucket::ProductBuckets;
use crate::key::{canonical_category, CanonicalKey};
use crate::normalize::strip_brand;
use crate::price;

/// Per-bucket summary for list views. Recomputed on every read, never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ListingCard {
    pub canonical_id: String,
    /// Brand-stripped name of the bucket's first member.
    pub display_name: String,
    /// Taxonomy-mapped category of the bucket's first member.
    pub category: String,
    /// First non-empty image in bucket order, if any.
    pub image: Option<String>,
    /// Minimum valid price across the bucket; `None` means every member's
    /// price is unknown.
    pub min_price: Option<f64>,
    /// Bucket length. Counts listings, not deduplicated store names, so a
    /// store appearing twice inflates the count.
    pub store_count: usize,
}

/// Project every bucket into a card, sorted ascending by minimum price.
///
/// Unknown prices sort last; ties keep first-seen bucket order (the sort
/// is stable).
#[must_use]
pub fn to_listing_cards(buckets: &ProductBuckets) -> Vec<ListingCard> {
    let mut cards: Vec<ListingCard> = buckets
        .iter()
        .map(|(key, members)| card_for(key, members))
        .collect();
    cards.sort_by(|a, b| price::by_price(a.min_price, b.min_price));
    cards
}

fn card_for(key: &CanonicalKey, members: &[RawListing]) -> ListingCard {
    let first = members.first();
    ListingCard {
        canonical_id: key.as_str().to_string(),
        display_name: first
            .map(|listing| strip_brand(&listing.name, listing.brand.as_deref()))
            .unwrap_or_default(),
        category: first
            .map(|listing| canonical_category(listing.category.as_deref()))
            .unwrap_or_default(),
        image: members.iter().find_map(|listing| {
            listing
                .image
                .as_deref()
                .filter(|url| !url.is_empty())
                .map(str::to_owned)
        }),
        min_price: price::min_price(members),
        store_count: members.len(),
    }
}
