//! Price parsing and discount arithmetic.
//!
//! All arithmetic is done in [`Decimal`] so that `"19.95"` stays `19.95`
//! through to the dataset file.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on the discount percentage.
const DISCOUNT_SCALE: u32 = 2;

/// Parses a feed price string.
///
/// Accepts plain decimals (`"12.99"`, `" 7 "`) and scientific notation
/// (`"1.2e2"`). Returns `None` for blank or unreadable input.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Percentage by which `price` sits below `original`.
///
/// Returns zero unless `original` is positive and strictly greater than
/// `price`. The result is rounded half-to-even to two decimal places.
#[must_use]
pub fn discount_pct(original: Decimal, price: Decimal) -> Decimal {
    if original <= Decimal::ZERO || original <= price {
        return Decimal::ZERO;
    }
    let Some(pct) = (original - price)
        .checked_div(original)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    else {
        return Decimal::ZERO;
    };
    pct.round_dp_with_strategy(DISCOUNT_SCALE, RoundingStrategy::MidpointNearestEven)
}
