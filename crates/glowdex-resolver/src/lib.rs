//! Entity resolution for multi-store retail catalogs.
//!
//! Stores share no common product identifiers, so identity is decided
//! heuristically from text alone: names are normalized, brand prefixes
//! stripped, embedded volumes extracted, and the result assembled into a
//! canonical key. Listings with equal keys are asserted to be the same
//! physical product and merged into one bucket, from which the two read
//! projections (cards and details) are computed.
//!
//! The whole pipeline is pure and synchronous: it is rebuilt from scratch
//! on every batch, holds no cross-batch state, and never performs I/O.

pub mod bucket;
pub mod cards;
pub mod categories;
pub mod detail;
pub mod key;
pub mod normalize;
pub mod parse;
mod price;

pub use bucket::{bucketize, ProductBuckets};
pub use cards::{to_listing_cards, ListingCard};
pub use categories::distinct_categories;
pub use detail::{build_detail, DetailView, Offer};
pub use key::{build_key, canonical_category, CanonicalKey};
pub use normalize::{normalize, strip_brand};
pub use parse::extract_volume;
