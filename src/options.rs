//! Configuration options for paragraph digests.
//!
//! The `Options` struct controls how many paragraphs are collected, how long
//! their summaries are, whether comments are stripped first and whether the
//! paragraph text is printed at all.

use crate::error::{Error, Result};
use crate::sentences::{SplitterPreference, DEFAULT_SENTENCES};

/// Paragraphs collected (and printed) unless configured otherwise.
pub const DEFAULT_MAX_PARAGRAPHS: usize = 5;

/// Configuration options for building a digest.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use para_digest::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     sentences: 1,
///     suppress_output: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of non-empty paragraphs collected.
    ///
    /// Default: `5`
    pub max_paragraphs: usize,

    /// Number of sentences kept in each paragraph summary.
    ///
    /// Default: `2`
    pub sentences: usize,

    /// Skip printing paragraph text.
    ///
    /// When `false`, [`Digest::write_paragraphs`](crate::Digest::write_paragraphs)
    /// prints the visible text of each collected paragraph, one per line.
    /// When `true`, nothing is written.
    ///
    /// Default: `false`
    pub suppress_output: bool,

    /// Remove comment nodes before any paragraph search.
    ///
    /// Default: `true`
    pub strip_comments: bool,

    /// Trim each text fragment of a paragraph before joining them for output.
    ///
    /// Summaries are always computed from the unstripped text.
    ///
    /// Default: `false`
    pub strip_whitespace: bool,

    /// Which sentence tokenizer to use for summaries.
    ///
    /// Default: `SplitterPreference::Auto`
    pub splitter: SplitterPreference,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_paragraphs: DEFAULT_MAX_PARAGRAPHS,
            sentences: DEFAULT_SENTENCES,
            suppress_output: false,
            strip_comments: true,
            strip_whitespace: false,
            splitter: SplitterPreference::Auto,
        }
    }
}

impl Options {
    /// Check option values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] when `max_paragraphs` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_paragraphs == 0 {
            return Err(Error::InvalidOption(
                "max_paragraphs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
