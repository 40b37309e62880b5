//! Error types for point-cloud I/O.

use thiserror::Error;

/// Errors that can occur while reading or writing point-cloud files.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PLY parsing error: {0}")]
    Parse(String),

    #[error("Missing '{name}' property at vertex {index}")]
    MissingProperty { name: &'static str, index: usize },
}
