//! The detail projection: the full multi-store offer list for one
//! canonical product.

use glowdex_core::RawListing;
use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::bucket::ProductBuckets;
use crate::key::canonical_category;
use crate::normalize::strip_brand;
use crate::price;

/// One store's offer for a canonical product.
#[derive(Debug, Clone, Serialize)]
pub struct Offer {
    pub store: String,
    pub price: Option<f64>,
    pub stock: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
}

/// Full offer breakdown for one bucket, built on demand.
#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    pub display_name: String,
    pub category: String,
    pub image: Option<String>,
    /// Offers ascending by price, unknown prices last.
    pub offers: Vec<Offer>,
}

/// Reconstruct the detail view for one canonical id.
///
/// The id is percent-decoded first — ids travel through routing as
/// encoded path segments. An absent or empty bucket is a lookup miss and
/// returns `None`; this is the not-found signal, never a panic.
#[must_use]
pub fn build_detail(buckets: &ProductBuckets, canonical_id: &str) -> Option<DetailView> {
    let decoded = percent_decode_str(canonical_id).decode_utf8_lossy();
    let Some(members) = buckets.get(decoded.as_ref()) else {
        tracing::debug!(canonical_id = %decoded, "detail lookup miss");
        return None;
    };
    let first = members.first()?;

    let mut offers: Vec<Offer> = members
        .iter()
        .map(|listing| Offer {
            store: listing.store.clone(),
            price: listing.price.filter(|p| p.is_finite()),
            stock: listing.stock.clone(),
            url: listing.url.clone(),
            image: listing.image.clone(),
        })
        .collect();
    offers.sort_by(|a, b| price::by_price(a.price, b.price));

    // Cross-check: the bucket minimum must be the first sorted offer.
    debug_assert_eq!(
        price::min_price(members),
        offers.first().and_then(|offer| offer.price),
        "bucket minimum diverged from first sorted offer"
    );

    Some(DetailView {
        display_name: strip_brand(&first.name, first.brand.as_deref()),
        category: canonical_category(first.category.as_deref()),
        image: members.iter().find_map(|listing| {
            listing
                .image
                .as_deref()
                .filter(|url| !url.is_empty())
                .map(str::to_owned)
        }),
        offers,
    })
}
