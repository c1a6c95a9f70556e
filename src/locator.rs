//! Sibling paragraph locator.
//!
//! Given any node, find the next paragraph-like node after it among its
//! element siblings. A `p` sibling is returned as is; a `div` sibling is
//! searched for its first `p` descendant.
//!
//! A `div` without any `p` inside is returned itself. This is almost certainly
//! not what a paragraph search wants, but existing callers depend on it, so it
//! is kept. [`next_para_hit`] reports which case occurred.

use dom_query::Selection;

use crate::dom;

/// Sibling tags the walk stops at.
const PARAGRAPH_LIKE: &[&str] = &["p", "div"];

/// Result of a paragraph search, distinguishing the `div` fallback.
#[derive(Debug, Clone)]
pub enum ParagraphHit<'a> {
    /// A `p` element: either a sibling or the first `p` inside a sibling `div`.
    Paragraph(Selection<'a>),
    /// A sibling `div` that holds no `p`.
    Container(Selection<'a>),
}

impl<'a> ParagraphHit<'a> {
    /// The located node, whichever case it is.
    #[must_use]
    pub fn node(&self) -> &Selection<'a> {
        match self {
            Self::Paragraph(sel) | Self::Container(sel) => sel,
        }
    }

    /// Consume the hit and return the located node.
    #[must_use]
    pub fn into_node(self) -> Selection<'a> {
        match self {
            Self::Paragraph(sel) | Self::Container(sel) => sel,
        }
    }

    /// `true` for the `div` fallback.
    #[must_use]
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Container(_))
    }
}

/// Find the next paragraph after `node`.
///
/// Returns `None` when no `p` or `div` follows `node` among its siblings,
/// including when `node` is the last child or the selection is empty.
///
/// # Example
///
/// ```rust
/// use para_digest::{dom, next_para};
///
/// let doc = dom::parse("<h1>Title</h1><ul><li>x</li></ul><div><p>Body</p></div>");
/// let para = next_para(&doc.select("h1")).expect("paragraph");
/// assert_eq!(para.text().to_string(), "Body");
/// ```
#[must_use]
pub fn next_para<'a>(node: &Selection<'a>) -> Option<Selection<'a>> {
    next_para_hit(node).map(ParagraphHit::into_node)
}

/// Like [`next_para`], but tells a real paragraph apart from the `div` fallback.
#[must_use]
pub fn next_para_hit<'a>(node: &Selection<'a>) -> Option<ParagraphHit<'a>> {
    let mut sibling = dom::next_element_sibling(node);
    while let Some(sib) = sibling {
        if PARAGRAPH_LIKE.iter().any(|tag| dom::has_tag(&sib, tag)) {
            return Some(classify(sib));
        }
        sibling = dom::next_element_sibling(&sib);
    }
    None
}

fn classify(sib: Selection<'_>) -> ParagraphHit<'_> {
    if !dom::has_tag(&sib, "div") {
        return ParagraphHit::Paragraph(sib);
    }
    match dom::find_descendant(&sib, "p") {
        Some(para) => ParagraphHit::Paragraph(para),
        None => ParagraphHit::Container(sib),
    }
}
