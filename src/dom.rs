//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing the handful of tree
//! operations the locator and digest need: parsing, tag names, element
//! sibling navigation, first-descendant lookup, comment removal and visible
//! text extraction.
//!
//! A "node" is a [`Selection`] holding a single node. Empty selections are
//! never handed out; absence is `None`.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

use tendril::StrTendril;

/// Elements whose text never reaches the reader.
const INVISIBLE_TAGS: &[&str] = &["script", "style", "noscript", "template"];

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Tag/Node Information ===

/// Get tag name (lowercase) of the first node in the selection.
///
/// Text and comment nodes have no tag name.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes().first().and_then(node_tag).map(|t| t.to_string())
}

/// Tag name of an element node, `None` for anything else.
#[inline]
fn node_tag(node: &NodeRef) -> Option<StrTendril> {
    if node.is_element() {
        node.node_name()
    } else {
        None
    }
}

/// Check whether the selection's node is an element with the given tag.
#[must_use]
pub fn has_tag(sel: &Selection, tag: &str) -> bool {
    tag_name(sel).is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

// === Tree Navigation ===

/// Get next element sibling (skipping text and comment nodes)
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}

/// Find the first descendant element with the given tag, in document order.
///
/// The node itself is not considered.
#[must_use]
pub fn find_descendant<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let node = sel.nodes().first()?;
    node.descendants()
        .into_iter()
        .find(|d| d.id != node.id && node_tag(d).is_some_and(|t| t.eq_ignore_ascii_case(tag)))
        .map(Selection::from)
}

// === Tree Manipulation ===

/// Remove all HTML comment nodes from the document.
///
/// Comments are collected first and detached afterwards, so the tree is never
/// modified while it is being walked. Returns the number of comments removed.
pub fn remove_comments(doc: &Document) -> usize {
    let comments: Vec<NodeRef> = doc
        .root()
        .descendants()
        .into_iter()
        .filter(NodeRef::is_comment)
        .collect();

    for comment in &comments {
        comment.remove_from_parent();
    }

    comments.len()
}

// === Querying ===

/// All `p` elements with non-blank visible text, in document order.
#[must_use]
pub fn paragraphs(doc: &Document) -> Vec<Selection<'_>> {
    doc.select("p")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|p| !visible_text(p, true).is_empty())
        .collect()
}

// === Text Content ===

/// Get the text a reader would see: every text node under the selection's
/// first node, skipping `script`, `style`, `noscript` and `template` content.
///
/// With `strip` set, each text fragment is trimmed and empty fragments are
/// dropped before concatenation. Without it, fragments are concatenated as is.
#[must_use]
pub fn visible_text(sel: &Selection, strip: bool) -> String {
    let Some(root) = sel.nodes().first() else {
        return String::new();
    };

    if root.is_text() {
        let text = root.text();
        return if strip { text.trim().to_string() } else { text.to_string() };
    }

    let mut out = String::new();
    for node in root.descendants() {
        if !node.is_text() || is_hidden(&node, root) {
            continue;
        }
        let text = node.text();
        if strip {
            out.push_str(text.trim());
        } else {
            out.push_str(&text);
        }
    }
    out
}

/// Whether a text node sits inside an invisible element below `root`.
fn is_hidden(node: &NodeRef, root: &NodeRef) -> bool {
    let mut current = node.parent();
    while let Some(parent) = current {
        if let Some(tag) = node_tag(&parent) {
            if INVISIBLE_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
                return true;
            }
        }
        if parent.id == root.id {
            return false;
        }
        current = parent.parent();
    }
    false
}
