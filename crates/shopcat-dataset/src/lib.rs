//! CSV persistence for the scraped dataset.
//!
//! [`write_dataset`] produces the file; [`read_dataset`] is the reading side
//! used by downstream consumers such as the report stage.

pub mod reader;
pub mod writer;

use std::path::PathBuf;

use thiserror::Error;

pub use reader::{read_dataset, read_records, DatasetRecord, OTHER_CATEGORY};
pub use writer::{write_dataset, write_placeholder, write_rows};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV error on {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
