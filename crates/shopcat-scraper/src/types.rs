//! Feed record types for the public `products.json` endpoint.
//!
//! ## Observed shape
//!
//! ### Prices
//! `price` and `compare_at_price` are decimal strings (`"199.00"`) on every
//! store we scrape, but older themes and proxies have been seen emitting bare
//! JSON numbers. Both are accepted via [`RawPrice`]. `compare_at_price` is
//! `null` when the variant is not on sale; some stores send `""` instead.
//!
//! ### Tags
//! The endpoint returns tags as a JSON array of strings. The legacy Liquid
//! shape is a single comma-separated string; [`RawTags`] accepts both.
//!
//! ### `product_type`
//! A plain string that is frequently empty (`""`). Treated as absent after
//! trimming.
//!
//! Every field except the identifiers is optional so that one sparse record
//! does not fail the whole page.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level response from `GET /products.json`.
#[derive(Debug, Deserialize)]
pub struct ProductsPage {
    #[serde(default)]
    pub products: Vec<RawProduct>,
}

/// A single product from the storefront feed.
#[derive(Debug, Deserialize)]
pub struct RawProduct {
    /// Numeric product ID (e.g., `6789012345678`).
    pub id: i64,

    /// Display name of the product. Absent or `null` becomes empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// URL slug for the product page. Absent or `null` becomes empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub handle: String,

    /// Category string. May be empty.
    #[serde(default)]
    pub product_type: Option<String>,

    #[serde(default)]
    pub tags: Option<RawTags>,

    /// All purchasable variants, in feed order.
    #[serde(default)]
    pub variants: Vec<RawVariant>,
}

/// A single purchasable variant of a [`RawProduct`].
#[derive(Debug, Deserialize)]
pub struct RawVariant {
    /// Numeric variant ID; unique across the feed.
    pub id: i64,

    /// Current selling price.
    #[serde(default)]
    pub price: Option<RawPrice>,

    /// List price shown struck through next to `price`, or `null`.
    #[serde(default)]
    pub compare_at_price: Option<RawPrice>,
}

/// A price as it appears on the wire: decimal string or JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Text(String),
    Number(serde_json::Number),
}

impl RawPrice {
    /// Parses the price into a [`Decimal`], or `None` when it is not a
    /// readable number.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        match self {
            RawPrice::Text(s) => crate::price::parse_decimal(s),
            RawPrice::Number(n) => crate::price::parse_decimal(&n.to_string()),
        }
    }

    /// Mirrors the feed's notion of "set": a non-blank string or a non-zero number.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            RawPrice::Text(s) => !s.trim().is_empty(),
            RawPrice::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        }
    }
}

/// Product tags: a JSON array on the modern endpoint, a comma-separated
/// string on legacy ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    List(Vec<String>),
    Text(String),
}

impl RawTags {
    /// Renders the tags as a single category label, or `None` when there are
    /// no non-blank tags.
    #[must_use]
    pub fn as_label(&self) -> Option<String> {
        let label = match self {
            RawTags::List(tags) => tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
            RawTags::Text(s) => s.trim().to_owned(),
        };
        (!label.is_empty()).then_some(label)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
