//! Normalization from raw feed records to [`shopcat_core::NormalizedRow`].
//!
//! Category resolution, the gift-card exclusion and price/discount derivation
//! live here. Price parsing itself is delegated to [`crate::price`].

use rust_decimal::Decimal;
use shopcat_core::{NormalizedRow, FALLBACK_CATEGORY};

use crate::price::discount_pct;
use crate::types::{RawPrice, RawProduct, RawVariant};

/// Title fragments that mark a product as a gift card (matched lower-cased).
const GIFT_CARD_MARKERS: [&str; 3] = ["gift card", "giftcard", "gift-card"];

/// Result of normalizing one product-variant pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeOutcome {
    Row(NormalizedRow),
    /// The product is a gift card; the variant is excluded from the dataset.
    GiftCard,
}

/// Normalizes one variant of `product` into a dataset row.
///
/// Returns [`NormalizeOutcome::GiftCard`] when the product title marks it as
/// a gift card, regardless of its prices.
#[must_use]
pub fn normalize_variant(product: &RawProduct, variant: &RawVariant) -> NormalizeOutcome {
    let title = product.title.trim();
    if is_gift_card(title) {
        return NormalizeOutcome::GiftCard;
    }

    let (original_price, discounted_price) = resolve_prices(variant);

    NormalizeOutcome::Row(NormalizedRow {
        product_id: product.id,
        variant_id: variant.id,
        handle: product.handle.clone(),
        title: title.to_owned(),
        original_price,
        discounted_price,
        discount_pct: discount_pct(original_price, discounted_price),
        category: resolve_category(product),
    })
}

/// Returns `true` if `title` names a gift card, with or without a space or hyphen.
#[must_use]
pub fn is_gift_card(title: &str) -> bool {
    let lower = title.trim().to_lowercase();
    GIFT_CARD_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Picks the category label: `product_type`, then tags, then [`FALLBACK_CATEGORY`].
#[must_use]
pub fn resolve_category(product: &RawProduct) -> String {
    if let Some(product_type) = product
        .product_type
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return product_type.to_owned();
    }

    product
        .tags
        .as_ref()
        .and_then(crate::types::RawTags::as_label)
        .unwrap_or_else(|| FALLBACK_CATEGORY.to_owned())
}

/// Returns `(original, current)` prices for a variant.
///
/// A missing or unreadable current price is zero. The compare-at price is used
/// as the original only when it is set; when set but unreadable, the current
/// price is used instead.
fn resolve_prices(variant: &RawVariant) -> (Decimal, Decimal) {
    let price = variant
        .price
        .as_ref()
        .and_then(RawPrice::to_decimal)
        .unwrap_or(Decimal::ZERO);

    let original = match variant.compare_at_price.as_ref().filter(|p| p.is_set()) {
        Some(compare_at) => compare_at.to_decimal().unwrap_or_else(|| {
            tracing::debug!(
                variant_id = variant.id,
                compare_at = ?compare_at,
                "unreadable compare_at_price; using current price"
            );
            price
        }),
        None => price,
    };

    (original, price)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
