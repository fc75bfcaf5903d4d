//! Error types for toblerone

use thiserror::Error;

/// Main error type for toblerone operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unrecognized thread label: {0:?}")]
    InvalidThreadLabel(char),

    #[error("Screening has no scene segments")]
    EmptyScreening,

    #[error("Total attention length is zero, thread percentages are undefined")]
    ZeroAttentionTotal,

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for toblerone operations
pub type Result<T> = std::result::Result<T, Error>;
