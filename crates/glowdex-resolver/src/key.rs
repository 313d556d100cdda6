//! Canonical key derivation — the identity decision for the whole engine.
//!
//! Two listings merge if and only if their keys are string-equal. The key
//! is deliberately exact: no confidence score, no fuzzy distance. The
//! conservative bias is to under-merge; a wrong merge poisons a price
//! comparison, a missed merge only duplicates a card.

use std::fmt;

use glowdex_core::RawListing;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;

use crate::normalize::{normalize, strip_brand};
use crate::parse::extract_volume;

/// Fixed, hand-curated stopword set for cosmetics feeds: Spanish/English
/// function words, marketing filler, and bare unit words (the quantity is
/// carried by the volume segment instead). Product policy — changing this
/// list re-keys every catalog.
const STOPWORDS: &[&str] = &[
    "a", "al", "con", "de", "del", "el", "en", "g", "gr", "kg", "la", "las", "los", "ml", "new",
    "nueva", "nuevo", "o", "oficial", "original", "oz", "para", "por", "sin", "un", "una", "y",
];

/// Category taxonomy: any mention of the needle in the normalized category
/// maps the listing onto the canonical bucket. Explicit makeup mentions
/// are tried first so `"maquillaje facial"` lands in makeup, not skincare.
const CATEGORY_TAXONOMY: &[(&str, &str)] = &[
    ("maquillaje", "makeup"),
    ("makeup", "makeup"),
    ("piel", "skincare"),
    ("skincare", "skincare"),
    ("facial", "skincare"),
    ("fragancia", "fragrance"),
    ("perfume", "fragrance"),
    ("fragrance", "fragrance"),
    ("cabello", "hair"),
    ("hair", "hair"),
];

/// Deterministic identity string for one physical product.
///
/// Shape: `core + "__" + volume + "__" + category`. Segments are
/// restricted to `[a-z0-9 ]` by normalization, so the `__` delimiter can
/// never occur inside a segment and the three parts separate losslessly.
/// Externally resolved ids are carried verbatim and may not follow this
/// shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route-safe form of the key for use as a URL path segment. The
    /// detail builder percent-decodes incoming ids, so this round-trips.
    #[must_use]
    pub fn encoded(&self) -> String {
        utf8_percent_encode(&self.0, NON_ALPHANUMERIC).to_string()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the canonical key for one listing.
///
/// An externally resolved `canonical_id` is returned verbatim, taking
/// precedence over every heuristic so re-keying is idempotent. Otherwise
/// the key combines the brand-stripped, stopword-filtered, order-
/// independent name tokens with the extracted volume and the taxonomy-
/// mapped category. Never fails; missing fields degrade to empty
/// segments that still participate correctly in equality.
#[must_use]
pub fn build_key(listing: &RawListing) -> CanonicalKey {
    if let Some(id) = listing
        .canonical_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        return CanonicalKey::new(id);
    }

    let base = strip_brand(&listing.name, listing.brand.as_deref());
    let volume = extract_volume(&base).unwrap_or_default();

    let mut tokens: Vec<&str> = base
        .split_whitespace()
        .filter(|token| !is_pure_numeric(token) && !STOPWORDS.contains(token))
        .collect();
    tokens.sort_unstable();
    tokens.dedup();
    let core = tokens.join(" ");

    let category = canonical_category(listing.category.as_deref());

    CanonicalKey::new(format!("{core}__{volume}__{category}"))
}

/// Normalize a raw category string and map it onto the fixed taxonomy.
/// Unmapped categories pass through normalized; a missing category is the
/// empty string.
#[must_use]
pub fn canonical_category(category: Option<&str>) -> String {
    let normalized = normalize(category.unwrap_or(""));
    for (needle, bucket) in CATEGORY_TAXONOMY {
        if normalized.contains(needle) {
            return (*bucket).to_string();
        }
    }
    normalized
}

fn is_pure_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
