//! Definition of errors.
//!
//! The segmenter runtime itself has no failure modes; these errors are
//! raised only while compiling JSON score tables into constant model data.

use std::io;

/// A specialized Result type for Kugiri.
pub type Result<T, E = KugiriError> = std::result::Result<T, E>;

/// The error type for Kugiri.
#[derive(Debug, thiserror::Error)]
pub enum KugiriError {
    /// A table held a key that does not fit its rank (a unigram table key
    /// must be one code point, a bigram key two, a trigram key three).
    #[error("invalid model key in {table}: {msg}")]
    InvalidKey {
        /// Name of the offending table.
        table: String,
        /// Error message.
        msg: String,
    },

    /// The error variant for [`serde_json::Error`].
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The error variant for [`std::io::Error`].
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The error variant for [`TryFromIntError`](std::num::TryFromIntError).
    #[error(transparent)]
    TryFromInt(#[from] std::num::TryFromIntError),
}

impl KugiriError {
    pub(crate) fn invalid_key<T, S>(table: T, msg: S) -> Self
    where
        T: Into<String>,
        S: Into<String>,
    {
        Self::InvalidKey {
            table: table.into(),
            msg: msg.into(),
        }
    }
}
