use std::fs::File;
use std::io::Write;
use std::path::Path;

use shopcat_core::{NormalizedRow, DATASET_HEADER};

use crate::DatasetError;

/// Writes the header and `rows`, in order, as CSV to `writer`.
///
/// The header is always written, so an empty slice yields a header-only file.
///
/// # Errors
///
/// Returns [`csv::Error`] if serialization or the underlying writer fails.
pub fn write_rows<W: Write>(writer: W, rows: &[NormalizedRow]) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(DATASET_HEADER)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the dataset to it.
///
/// Returns the number of data rows written. A failure part-way leaves the
/// file in whatever state it reached.
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be created, or
/// [`DatasetError::Csv`] if writing fails.
pub fn write_dataset(path: &Path, rows: &[NormalizedRow]) -> Result<usize, DatasetError> {
    let file = File::create(path).map_err(|e| DatasetError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    write_rows(file, rows).map_err(|e| DatasetError::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), rows = rows.len(), "dataset written");
    Ok(rows.len())
}

/// Writes a header-only dataset to `path`.
///
/// # Errors
///
/// See [`write_dataset`].
pub fn write_placeholder(path: &Path) -> Result<(), DatasetError> {
    write_dataset(path, &[]).map(|_| ())
}
