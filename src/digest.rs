//! Paragraph digest pipeline.
//!
//! Loading a document runs, in order:
//!
//! 1. decoding (byte inputs only, see [`encoding`](crate::encoding))
//! 2. parsing with `dom_query`
//! 3. comment removal, when [`Options::strip_comments`] is set
//!
//! After that the tree is only read. Paragraphs are the `p` elements with
//! non-blank visible text, capped at [`Options::max_paragraphs`].

use std::io::{Read, Write};
use std::path::Path;

use dom_query::{Document, Selection};

use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::locator;
use crate::options::Options;
use crate::result::{DigestReport, ParagraphSummary};
use crate::sentences::SentenceSplitter;

/// Path label used in errors for standard streams.
const STDIO: &str = "-";

/// A parsed, comment-free document ready for paragraph queries.
pub struct Digest {
    document: Document,
    options: Options,
    splitter: SentenceSplitter,
    comments_removed: usize,
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Digest")
            .field("options", &self.options)
            .field("splitter", &self.splitter)
            .field("comments_removed", &self.comments_removed)
            .finish_non_exhaustive()
    }
}

impl Digest {
    /// Parse an HTML string, resolving the sentence splitter from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if the options do not validate.
    pub fn parse(html: &str, options: &Options) -> Result<Self> {
        let splitter = SentenceSplitter::resolve(options.splitter);
        Self::parse_with_splitter(html, options, splitter)
    }

    /// Parse an HTML string with an already resolved splitter.
    ///
    /// Use this to resolve the tokenizer once and share it across documents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if the options do not validate.
    pub fn parse_with_splitter(
        html: &str,
        options: &Options,
        splitter: SentenceSplitter,
    ) -> Result<Self> {
        options.validate()?;

        let document = dom::parse(html);
        let comments_removed = if options.strip_comments {
            dom::remove_comments(&document)
        } else {
            0
        };

        tracing::debug!(
            html_len = html.len(),
            comments_removed,
            splitter = splitter.name(),
            "document loaded"
        );

        Ok(Self {
            document,
            options: options.clone(),
            splitter,
            comments_removed,
        })
    }

    /// Decode HTML bytes (BOM or `<meta>` charset, else UTF-8) and parse them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if the options do not validate.
    pub fn from_bytes(html: &[u8], options: &Options) -> Result<Self> {
        Self::from_bytes_with_splitter(html, options, SentenceSplitter::resolve(options.splitter))
    }

    /// [`Digest::from_bytes`] with an already resolved splitter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if the options do not validate.
    pub fn from_bytes_with_splitter(
        html: &[u8],
        options: &Options,
        splitter: SentenceSplitter,
    ) -> Result<Self> {
        Self::parse_with_splitter(&encoding::decode_html(html), options, splitter)
    }

    /// Read a whole HTML file and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::InvalidOption`] if the options do not validate.
    pub fn from_path(path: impl AsRef<Path>, options: &Options) -> Result<Self> {
        Self::from_path_with_splitter(path, options, SentenceSplitter::resolve(options.splitter))
    }

    /// [`Digest::from_path`] with an already resolved splitter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::InvalidOption`] if the options do not validate.
    pub fn from_path_with_splitter(
        path: impl AsRef<Path>,
        options: &Options,
        splitter: SentenceSplitter,
    ) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        Self::from_bytes_with_splitter(&bytes, options, splitter)
    }

    /// Read a whole HTML document from a reader, such as standard input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails, or [`Error::InvalidOption`]
    /// if the options do not validate.
    pub fn from_reader(reader: impl Read, options: &Options) -> Result<Self> {
        Self::from_reader_with_splitter(reader, options, SentenceSplitter::resolve(options.splitter))
    }

    /// [`Digest::from_reader`] with an already resolved splitter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails, or [`Error::InvalidOption`]
    /// if the options do not validate.
    pub fn from_reader_with_splitter(
        mut reader: impl Read,
        options: &Options,
        splitter: SentenceSplitter,
    ) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io(STDIO, e))?;
        Self::from_bytes_with_splitter(&bytes, options, splitter)
    }

    /// The parsed document, comments already removed if configured.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The options this digest was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The sentence splitter in effect.
    #[must_use]
    pub fn splitter(&self) -> SentenceSplitter {
        self.splitter
    }

    /// Number of comment nodes removed while loading.
    #[must_use]
    pub fn comments_removed(&self) -> usize {
        self.comments_removed
    }

    /// The first `max_paragraphs` non-empty `p` elements, in document order.
    #[must_use]
    pub fn paragraphs(&self) -> Vec<Selection<'_>> {
        let mut paras = dom::paragraphs(&self.document);
        paras.truncate(self.options.max_paragraphs);
        paras
    }

    /// Run the sibling locator from the collected paragraph at `index`.
    ///
    /// `None` if there is no such paragraph or nothing paragraph-like follows it.
    #[must_use]
    pub fn next_para_after(&self, index: usize) -> Option<Selection<'_>> {
        let paras = self.paragraphs();
        locator::next_para(paras.get(index)?)
    }

    /// First [`Options::sentences`] sentences of `text`.
    #[must_use]
    pub fn summarize(&self, text: &str) -> String {
        self.splitter.first_n_sentences(text, self.options.sentences)
    }

    /// Text and summary of every collected paragraph.
    #[must_use]
    pub fn report(&self) -> DigestReport {
        let paragraphs: Vec<ParagraphSummary> = self
            .paragraphs()
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let text = dom::visible_text(p, false);
                ParagraphSummary {
                    index,
                    summary: self.summarize(&text),
                    stripped_text: dom::visible_text(p, true),
                    text,
                }
            })
            .collect();

        tracing::debug!(paragraphs = paragraphs.len(), "digest report built");

        DigestReport {
            paragraphs,
            comments_removed: self.comments_removed,
            splitter: self.splitter,
        }
    }

    /// Print the visible text of each collected paragraph, one per line.
    ///
    /// Writes nothing when [`Options::suppress_output`] is set. Returns the
    /// number of paragraphs written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn write_paragraphs<W: Write>(&self, writer: &mut W) -> Result<usize> {
        if self.options.suppress_output {
            return Ok(0);
        }

        let paras = self.paragraphs();
        for p in &paras {
            let text = dom::visible_text(p, self.options.strip_whitespace);
            writeln!(writer, "{text}").map_err(|e| Error::io(STDIO, e))?;
        }
        Ok(paras.len())
    }
}
