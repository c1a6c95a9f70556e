//! # para-digest
//!
//! Find the paragraphs of an HTML document and summarize them to their first
//! few sentences.
//!
//! ## Quick Start
//!
//! ```rust
//! use para_digest::{digest, Options};
//!
//! let html = r#"<html><body><!-- nav --><h1>News</h1>
//! <p>Rust 2.0 was not released today. Nobody was surprised. Film at eleven.</p>
//! </body></html>"#;
//!
//! let report = digest(html, &Options::default())?;
//! assert_eq!(report.paragraphs[0].summary, "Rust 2.0 was not released today. Nobody was surprised.");
//! assert_eq!(report.comments_removed, 1);
//! # Ok::<(), para_digest::Error>(())
//! ```
//!
//! ## Pieces
//!
//! - **Paragraph locator**: [`next_para`] walks forward from any node to the
//!   next `p`, looking inside a sibling `div` for its first `p`.
//! - **Sentence extraction**: [`SentenceSplitter::first_n_sentences`], backed
//!   by UAX #29 segmentation (feature `unicode-sentences`, on by default) or
//!   a punctuation regex. The choice is made once by
//!   [`SentenceSplitter::resolve`].
//! - **Digest**: [`Digest`] loads a document, strips comments and reports the
//!   first non-empty paragraphs with their summaries.

mod digest;
mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and decoding.
pub mod encoding;

/// Next-paragraph traversal over sibling chains.
pub mod locator;

/// Sentence tokenizers and first-sentence summaries.
pub mod sentences;

// Public API - re-exports
pub use digest::Digest;
pub use error::{Error, Result};
pub use locator::{next_para, next_para_hit, ParagraphHit};
pub use options::{Options, DEFAULT_MAX_PARAGRAPHS};
pub use result::{DigestReport, ParagraphSummary};
pub use sentences::{SentenceSplitter, SentenceTokenizer, SplitterPreference, DEFAULT_SENTENCES};

/// Builds a paragraph report for an HTML string.
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] if `options` do not validate.
///
/// # Example
///
/// ```rust
/// use para_digest::{digest, Options, SplitterPreference};
///
/// let options = Options {
///     sentences: 1,
///     splitter: SplitterPreference::Regex,
///     ..Options::default()
/// };
/// let report = digest("<p>One. Two.</p><p>   </p>", &options)?;
/// assert_eq!(report.paragraphs.len(), 1);
/// assert_eq!(report.paragraphs[0].summary, "One.");
/// # Ok::<(), para_digest::Error>(())
/// ```
pub fn digest(html: &str, options: &Options) -> Result<DigestReport> {
    Ok(Digest::parse(html, options)?.report())
}

/// Builds a paragraph report for HTML bytes, detecting their encoding.
///
/// The encoding comes from a byte order mark, a `<meta>` charset
/// declaration, or defaults to UTF-8. Invalid sequences are replaced with
/// U+FFFD rather than causing errors.
///
/// # Errors
///
/// Returns [`Error::InvalidOption`] if `options` do not validate.
///
/// # Example
///
/// ```rust
/// use para_digest::{digest_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><p>Caf\xE9</p></body></html>";
/// let report = digest_bytes(html, &Options::default())?;
/// assert_eq!(report.paragraphs[0].text, "Café");
/// # Ok::<(), para_digest::Error>(())
/// ```
pub fn digest_bytes(html: &[u8], options: &Options) -> Result<DigestReport> {
    Ok(Digest::from_bytes(html, options)?.report())
}
