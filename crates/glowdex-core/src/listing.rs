//! Raw listing shapes as they arrive from per-store feed snapshots.
//!
//! ## Observed shape from live store feeds
//!
//! The stores in scope expose no common schema. Field names drift across
//! feed generations (`imagen` / `img` / `image_url` all appear for the
//! image URL, `precio` / `cost` for the price), casing and accents are
//! inconsistent, and prices arrive either as JSON numbers or as numeric
//! strings. Every field except `name` can be absent, and `name` itself is
//! occasionally missing on malformed rows.
//!
//! The policy for all of it is local degradation: a broken field on one
//! record becomes `None` (or an empty string) on that record and the rest
//! of the batch is untouched. Deserializing a listing never fails on a
//! well-typed-but-incomplete object; only a fundamentally wrong document
//! shape (a non-array feed) is an error, and that is raised by the feed
//! loader, not here.

use serde::{Deserialize, Deserializer, Serialize};

/// One scraped record from one store, consumed read-only by the resolution
/// pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawListing {
    /// Externally resolved canonical id, honored verbatim by the key
    /// builder when present. Takes precedence over all heuristics so that
    /// re-keying an already-resolved record is idempotent.
    #[serde(default, alias = "canonicalId", alias = "canonical")]
    pub canonical_id: Option<String>,

    /// Product name as displayed by the store. Defaults to `""` when the
    /// row is malformed; an empty name still keys correctly (empty core
    /// segment).
    #[serde(default, alias = "nombre", alias = "title")]
    pub name: String,

    /// Brand name, when the store exposes it separately from the name.
    #[serde(default, alias = "marca")]
    pub brand: Option<String>,

    /// Store-assigned category string, free-form.
    #[serde(default, alias = "categoria", alias = "category_name")]
    pub category: Option<String>,

    /// Price in the store's currency. Feeds send numbers or numeric
    /// strings; anything unparseable degrades to `None` ("price unknown"),
    /// never an error.
    #[serde(
        default,
        alias = "precio",
        alias = "cost",
        deserialize_with = "de_price"
    )]
    pub price: Option<f64>,

    /// Stock status string, passed through untouched (e.g. `"in_stock"`,
    /// `"agotado"`).
    #[serde(default, alias = "disponibilidad", alias = "availability")]
    pub stock: Option<String>,

    /// Product image URL.
    #[serde(
        default,
        alias = "imagen",
        alias = "img",
        alias = "image_url",
        alias = "imageUrl"
    )]
    pub image: Option<String>,

    /// Product page URL at the store.
    #[serde(default, alias = "link", alias = "product_url")]
    pub url: Option<String>,

    /// Store identifier. Feeds usually omit it (the snapshot file is
    /// per-store); the feed loader stamps the registry slug on records
    /// that arrive without one.
    #[serde(default, alias = "tienda", alias = "shop")]
    pub store: String,
}

impl RawListing {
    /// Returns `true` if the listing carries a usable price.
    ///
    /// Non-finite values are filtered out at deserialization time, so this
    /// is a plain presence check.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.price.is_some()
    }
}

/// Tolerant price field: JSON number, numeric string, or anything else.
///
/// Numeric strings are trimmed before parsing. Non-finite numbers and
/// non-numeric values map to `None` so an invalid price can never win a
/// min-price computation downstream.
fn de_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceField {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let value = Option::<PriceField>::deserialize(deserializer)?;
    Ok(value.and_then(|field| match field {
        PriceField::Number(n) => Some(n),
        PriceField::Text(s) => s.trim().parse::<f64>().ok(),
        PriceField::Other(_) => None,
    })
    .filter(|p| p.is_finite()))
}
