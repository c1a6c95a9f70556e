//! Result types for digest output.

use serde::Serialize;

use crate::sentences::SentenceSplitter;

/// One collected paragraph and its summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParagraphSummary {
    /// Position among the non-empty paragraphs of the document (0-based).
    pub index: usize,

    /// Visible text, fragments joined as found.
    pub text: String,

    /// Visible text with every fragment trimmed.
    pub stripped_text: String,

    /// First sentences of `text`.
    pub summary: String,
}

/// Everything a digest found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestReport {
    /// Collected paragraphs, in document order.
    pub paragraphs: Vec<ParagraphSummary>,

    /// Comment nodes removed before the paragraph search.
    pub comments_removed: usize,

    /// Tokenizer used for the summaries.
    pub splitter: SentenceSplitter,
}

impl DigestReport {
    /// `true` when no paragraph with visible text was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
