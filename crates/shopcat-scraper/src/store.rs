//! First-seen-wins accumulation of dataset rows.

use std::collections::HashSet;

use shopcat_core::NormalizedRow;

/// Accumulates rows for one scrape run, keeping only the first row recorded
/// for each variant ID.
///
/// Rows come back out in the order they were first recorded.
#[derive(Debug, Default)]
pub struct VariantStore {
    seen: HashSet<i64>,
    rows: Vec<NormalizedRow>,
}

impl VariantStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `row` under `variant_id`.
    ///
    /// Returns `false` and leaves the store untouched if the variant was
    /// already recorded.
    pub fn record(&mut self, variant_id: i64, row: NormalizedRow) -> bool {
        if !self.seen.insert(variant_id) {
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Number of distinct variant IDs recorded.
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> Vec<NormalizedRow> {
        self.rows
    }
}
