//! `inspect` command: read-only summary of a written dataset.

use std::collections::BTreeMap;
use std::path::Path;

use rust_decimal::Decimal;
use shopcat_dataset::DatasetRecord;

/// Aggregates printed by `inspect`.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DatasetSummary<'a> {
    pub rows: usize,
    pub discounted: usize,
    /// Category → row count, sorted by descending count then name.
    pub categories: Vec<(&'a str, usize)>,
    /// Largest discounts first; rows without a discount are left out.
    pub top_discounts: Vec<&'a DatasetRecord>,
}

/// Builds the summary for `records`, keeping at most `top` discounted rows.
pub(crate) fn summarize(records: &[DatasetRecord], top: usize) -> DatasetSummary<'_> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.category.as_str()).or_default() += 1;
    }
    let mut categories: Vec<(&str, usize)> = counts.into_iter().collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut discounted: Vec<&DatasetRecord> = records
        .iter()
        .filter(|r| r.discount_pct.is_some_and(|pct| pct > Decimal::ZERO))
        .collect();
    let discounted_count = discounted.len();
    // Stable sort keeps dataset order among equal discounts.
    discounted.sort_by(|a, b| b.discount_pct.cmp(&a.discount_pct));
    discounted.truncate(top);

    DatasetSummary {
        rows: records.len(),
        discounted: discounted_count,
        categories,
        top_discounts: discounted,
    }
}

fn price_label(price: Option<Decimal>) -> String {
    price.map_or_else(|| "-".to_owned(), |p| format!("{p:.2}"))
}

/// Prints a summary of the dataset at `path`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read as CSV.
pub(crate) fn run_inspect(path: &Path, top: usize) -> anyhow::Result<()> {
    let records = shopcat_dataset::read_dataset(path)?;

    if records.is_empty() {
        println!(
            "no rows in {}; run `shopcat scrape` first",
            path.display()
        );
        return Ok(());
    }

    let summary = summarize(&records, top);

    println!("dataset: {}", path.display());
    println!("rows: {}", summary.rows);
    println!("discounted: {}", summary.discounted);
    println!();
    println!("{:<40}ROWS", "CATEGORY");
    for (category, count) in &summary.categories {
        println!("{category:<40}{count}");
    }

    if !summary.top_discounts.is_empty() {
        println!();
        println!("{:<10}{:<12}{:<12}TITLE", "DISCOUNT", "WAS", "NOW");
        for record in &summary.top_discounts {
            println!(
                "{:<10}{:<12}{:<12}{}",
                format!("{}%", price_label(record.discount_pct)),
                price_label(record.original_price),
                price_label(record.discounted_price),
                record.title
            );
        }
    }

    Ok(())
}
