//! Sentence splitting and first-sentence summaries.
//!
//! Two tokenizers are available:
//!
//! - **Linguistic**: UAX #29 sentence boundaries from `unicode-segmentation`.
//!   Only compiled with the `unicode-sentences` feature.
//! - **Regex**: splits after `.`, `!` or `?` when followed by whitespace. The
//!   punctuation stays attached to the sentence it ends.
//!
//! Which one is used is decided once, by [`SentenceSplitter::resolve`], and the
//! resulting value is passed to whatever needs to split text. There is no
//! global state and no per-call retry.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::Result;

/// Number of sentences kept by a summary unless configured otherwise.
pub const DEFAULT_SENTENCES: usize = 2;

/// Terminal punctuation followed by a whitespace run.
///
/// The punctuation is a single ASCII byte, so the split point is `start + 1`.
#[allow(clippy::expect_used)]
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("SENTENCE_BOUNDARY regex"));

/// Splits text into an ordered sequence of sentences.
pub trait SentenceTokenizer {
    /// Returns the sentences of `text`, in order.
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Punctuation based splitter used when no linguistic tokenizer is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexTokenizer;

impl SentenceTokenizer for RegexTokenizer {
    /// Splits the trimmed text at every boundary. Always returns at least one
    /// part; an empty input yields `[""]`.
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let text = text.trim();
        let mut parts = Vec::new();
        let mut start = 0;

        for boundary in SENTENCE_BOUNDARY.find_iter(text) {
            parts.push(&text[start..=boundary.start()]);
            start = boundary.end();
        }
        parts.push(&text[start..]);

        parts
    }
}

/// UAX #29 sentence tokenizer.
#[cfg(feature = "unicode-sentences")]
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeTokenizer;

#[cfg(feature = "unicode-sentences")]
impl SentenceTokenizer for UnicodeTokenizer {
    /// Sentences are trimmed; segments without any alphanumeric character
    /// (stray punctuation, whitespace) are dropped.
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        use unicode_segmentation::UnicodeSegmentation;

        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| s.chars().any(char::is_alphanumeric))
            .collect()
    }
}

/// Which tokenizer the caller would like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitterPreference {
    /// Linguistic tokenizer when it can be loaded, regex otherwise.
    #[default]
    Auto,
    /// Always use the regex splitter.
    Regex,
}

/// The sentence splitting strategy in effect.
///
/// Obtained from [`SentenceSplitter::resolve`]; cheap to copy and pass around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceSplitter {
    /// UAX #29 sentence boundaries.
    #[cfg(feature = "unicode-sentences")]
    Linguistic,
    /// Terminal punctuation followed by whitespace.
    Regex,
}

impl SentenceSplitter {
    /// Resolves a preference into a concrete strategy.
    ///
    /// A tokenizer that fails to load is logged and replaced by the regex
    /// splitter; this never fails.
    #[must_use]
    pub fn resolve(preference: SplitterPreference) -> Self {
        match preference {
            SplitterPreference::Regex => Self::Regex,
            SplitterPreference::Auto => match Self::linguistic() {
                Ok(splitter) => splitter,
                Err(err) => {
                    tracing::debug!(error = %err, "falling back to regex sentence splitter");
                    Self::Regex
                }
            },
        }
    }

    /// Loads the linguistic tokenizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenizerUnavailable`](crate::Error::TokenizerUnavailable) when the crate was built
    /// without the `unicode-sentences` feature.
    pub fn linguistic() -> Result<Self> {
        #[cfg(feature = "unicode-sentences")]
        {
            Ok(Self::Linguistic)
        }
        #[cfg(not(feature = "unicode-sentences"))]
        {
            Err(crate::Error::TokenizerUnavailable(
                "built without the `unicode-sentences` feature".to_string(),
            ))
        }
    }

    /// Short name used in logs and reports.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "unicode-sentences")]
            Self::Linguistic => "linguistic",
            Self::Regex => "regex",
        }
    }

    /// Returns the first `n` sentences of `text`, joined by single spaces and
    /// trimmed.
    ///
    /// Fewer than `n` sentences returns all of them; empty input (or `n == 0`)
    /// returns an empty string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use para_digest::{SentenceSplitter, SplitterPreference};
    ///
    /// let splitter = SentenceSplitter::resolve(SplitterPreference::Regex);
    /// assert_eq!(splitter.first_n_sentences("A. B! C?", 2), "A. B!");
    /// ```
    #[must_use]
    pub fn first_n_sentences(self, text: &str, n: usize) -> String {
        self.split(text)
            .into_iter()
            .take(n)
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::resolve(SplitterPreference::Auto)
    }
}

impl SentenceTokenizer for SentenceSplitter {
    fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        match self {
            #[cfg(feature = "unicode-sentences")]
            Self::Linguistic => UnicodeTokenizer.split(text),
            Self::Regex => RegexTokenizer.split(text),
        }
    }
}
