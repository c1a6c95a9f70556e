//! Error types for para-digest.
//!
//! Traversal never fails (absence is `None`), so errors only come from
//! reading input, writing the report, configuration and tokenizer setup.

use std::path::PathBuf;

/// Error type for digest operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the document or writing the report failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read, or `-` for standard streams.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The linguistic sentence tokenizer could not be set up.
    ///
    /// Only produced while resolving a [`SentenceSplitter`](crate::SentenceSplitter);
    /// resolution downgrades to the regex splitter instead of returning it.
    #[error("Sentence tokenizer unavailable: {0}")]
    TokenizerUnavailable(String),

    /// An option value is out of range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for digest operations.
pub type Result<T> = std::result::Result<T, Error>;
