use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the rules table. All of them are fatal at startup;
/// the derivation engine itself never fails.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("source not found: {}", .path.display())]
    MissingSource { path: PathBuf },

    #[error("sheet '{sheet}' not found in {}", .path.display())]
    MissingSheet { path: PathBuf, sheet: String },

    #[error("required column '{column}' missing from header row")]
    MissingColumn { column: String },

    #[error("unsupported source format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("workbook: {0}")]
    Workbook(String),

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("column config: {0}")]
    ColumnConfig(String),
}

impl DatasetError {
    /// True when the error names a resource (file or sheet) that could not be found.
    pub fn is_missing_source(&self) -> bool {
        matches!(self, Self::MissingSource { .. } | Self::MissingSheet { .. })
    }
}
