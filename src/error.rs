//! Error type of the crate.

use thiserror::Error;

/// Errors raised around the color mapper (which itself never fails).
#[derive(Error, Debug)]
pub enum Error {
    /// A string could not be read as a CSS color.
    #[error("invalid color “{input}”: {reason}")]
    InvalidColor {
        input: String,
        reason: &'static str,
    },

    /// No row of the dataset has this subject.
    #[error("unknown subject “{0}”")]
    UnknownSubject(String),

    /// A row does not have one value per label.
    #[error("row “{subject}” has {found} values, expected {expected}")]
    RowLength {
        subject: String,
        expected: usize,
        found: usize,
    },

    /// JSON configuration or export failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
