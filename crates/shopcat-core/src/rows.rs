use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Column header of the dataset file, in write order.
pub const DATASET_HEADER: [&str; 8] = [
    "Product ID",
    "Variant ID",
    "Handle",
    "Title",
    "Original Price",
    "Discounted Price",
    "Discount %",
    "Category",
];

/// Category assigned when a product has neither `product_type` nor tags.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// One purchasable variant, denormalized with its product fields.
///
/// Field order matches [`DATASET_HEADER`]; the serde renames are the header
/// labels so the row can be serialized straight into the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRow {
    #[serde(rename = "Product ID")]
    pub product_id: i64,
    #[serde(rename = "Variant ID")]
    pub variant_id: i64,
    /// Product URL slug; may be empty.
    #[serde(rename = "Handle")]
    pub handle: String,
    #[serde(rename = "Title")]
    pub title: String,
    /// Compare-at price when the feed supplies one, otherwise the current price.
    #[serde(rename = "Original Price")]
    pub original_price: Decimal,
    /// Current selling price.
    #[serde(rename = "Discounted Price")]
    pub discounted_price: Decimal,
    /// Percentage below `original_price`, rounded to two places; `0` when not on sale.
    #[serde(rename = "Discount %")]
    pub discount_pct: Decimal,
    #[serde(rename = "Category")]
    pub category: String,
}

impl NormalizedRow {
    /// Returns `true` when the row carries a positive discount.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount_pct > Decimal::ZERO
    }
}
