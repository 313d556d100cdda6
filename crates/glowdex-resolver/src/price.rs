//! Shared price arithmetic for the read projections.

use std::cmp::Ordering;

use glowdex_core::RawListing;

/// Minimum valid price across a bucket.
///
/// Missing and non-finite prices are treated as +infinity for the
/// comparison, so an invalid price can never win; a bucket with zero
/// valid prices yields `None` — the distinct "price unknown" state, never
/// a bare zero.
#[must_use]
pub(crate) fn min_price(listings: &[RawListing]) -> Option<f64> {
    listings
        .iter()
        .filter_map(|listing| listing.price)
        .filter(|price| price.is_finite())
        .reduce(f64::min)
}

/// Total ascending order over optional prices with unknown prices last.
pub(crate) fn by_price(a: Option<f64>, b: Option<f64>) -> Ordering {
    effective(a).total_cmp(&effective(b))
}

/// The value a price contributes to ordering: unknown sorts after every
/// known price.
pub(crate) fn effective(price: Option<f64>) -> f64 {
    price
        .filter(|p| p.is_finite())
        .map_or(f64::INFINITY, |p| p)
}
