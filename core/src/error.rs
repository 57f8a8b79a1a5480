use std::path::PathBuf;
use thiserror::Error;

/// Structural problems that make a data file unusable.
///
/// These abort startup; row-level problems never surface here.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data file not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed table in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("required column '{column}' missing from {}", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("invalid district rule: {0}")]
    DistrictRule(#[from] regex::Error),
}
