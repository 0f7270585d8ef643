//! Error handling for the OMOP CDM crate.

use parquet::errors::ParquetError;
use std::io;
use std::path::PathBuf;

/// Specialized error type for OMOP CDM operations
#[derive(Debug, thiserror::Error)]
pub enum CdmError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error converting between Arrow batches and typed records
    #[error("Record conversion error: {0}")]
    Conversion(#[from] serde_arrow::Error),

    /// A file's schema does not match a declared table
    #[error("Schema error for table '{table}' in {}: {message}", path.display())]
    Schema {
        /// Declared table name
        table: String,
        /// File whose schema was checked
        path: PathBuf,
        /// Description of the incompatibility
        message: String,
    },

    /// Structural problem in the table catalog
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl CdmError {
    /// Build a schema error for a table/file pair
    pub fn schema(
        table: impl Into<String>,
        path: impl Into<PathBuf>,
        message: impl Into<String>,
    ) -> Self {
        Self::Schema {
            table: table.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type for OMOP CDM operations
pub type Result<T> = std::result::Result<T, CdmError>;
