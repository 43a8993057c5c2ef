//! Reading side of the dataset file.
//!
//! A missing file reads as an empty dataset. Blank or unreadable prices
//! become `None`; a blank category becomes [`OTHER_CATEGORY`].

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::DatasetError;

/// Category shown for rows whose category column is blank.
pub const OTHER_CATEGORY: &str = "Other";

/// One dataset row as seen by a consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRecord {
    pub product_id: String,
    pub variant_id: String,
    pub handle: String,
    pub title: String,
    pub original_price: Option<Decimal>,
    pub discounted_price: Option<Decimal>,
    pub discount_pct: Option<Decimal>,
    pub category: String,
}

/// Column-by-column view of a CSV line; every column may be missing.
#[derive(Debug, Deserialize)]
struct CsvLine {
    #[serde(rename = "Product ID", default)]
    product_id: Option<String>,
    #[serde(rename = "Variant ID", default)]
    variant_id: Option<String>,
    #[serde(rename = "Handle", default)]
    handle: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Original Price", default)]
    original_price: Option<String>,
    #[serde(rename = "Discounted Price", default)]
    discounted_price: Option<String>,
    #[serde(rename = "Discount %", default)]
    discount_pct: Option<String>,
    #[serde(rename = "Category", default)]
    category: Option<String>,
}

impl From<CsvLine> for DatasetRecord {
    fn from(line: CsvLine) -> Self {
        let text = |v: Option<String>| v.map(|s| s.trim().to_owned()).unwrap_or_default();
        let category = text(line.category);
        Self {
            product_id: text(line.product_id),
            variant_id: text(line.variant_id),
            handle: text(line.handle),
            title: text(line.title),
            original_price: line.original_price.as_deref().and_then(parse_price),
            discounted_price: line.discounted_price.as_deref().and_then(parse_price),
            discount_pct: line.discount_pct.as_deref().and_then(parse_price),
            category: if category.is_empty() {
                OTHER_CATEGORY.to_owned()
            } else {
                category
            },
        }
    }
}

/// Parses a price cell, accepting currency formatting such as `"$1,299.00"`.
fn parse_price(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// Reads dataset records from any CSV source with a header row.
///
/// # Errors
///
/// Returns [`csv::Error`] if the source cannot be read or a line is not valid CSV.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<DatasetRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    csv_reader
        .deserialize::<CsvLine>()
        .map(|line| line.map(DatasetRecord::from))
        .collect()
}

/// Reads the dataset at `path`. A missing file is an empty dataset.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file exists but cannot be opened, or
/// [`DatasetError::Csv`] if its contents are not valid CSV.
pub fn read_dataset(path: &Path) -> Result<Vec<DatasetRecord>, DatasetError> {
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "dataset file not found; treating as empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(DatasetError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    read_records(file).map_err(|e| DatasetError::Csv {
        path: path.to_path_buf(),
        source: e,
    })
}
