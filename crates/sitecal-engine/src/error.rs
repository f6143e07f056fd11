use std::fmt;

use crate::export::ExportDataset;

/// Result type for sitecal-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Invalid domain input (bad month, bad date)
    Types(sitecal_types::Error),

    /// Nothing left to export after filtering
    EmptyExport(ExportDataset),

    /// JSON encoding of export records failed
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::EmptyExport(dataset) => {
                write!(f, "No data to export ({})", dataset.label())
            }
            Error::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::EmptyExport(_) => None,
        }
    }
}

impl From<sitecal_types::Error> for Error {
    fn from(err: sitecal_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
