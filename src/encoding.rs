//! Decoding HTML bytes to UTF-8.
//!
//! Encoding is picked in this order: a byte order mark, a charset declared by
//! a `<meta>` tag in the first 1024 bytes (either `charset="..."` or an
//! `http-equiv` content type), then UTF-8. Undecodable bytes become U+FFFD.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// Bytes examined for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

/// `charset=` inside a `<meta>` tag; covers both `<meta charset>` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]+?charset\s*=\s*["']?([a-z0-9_:.\-]+)"#)
        .expect("META_CHARSET regex")
});

/// Encoding declared by a `<meta>` tag near the start of the document.
///
/// A declared UTF-16 variant is read as UTF-8: bytes that reached a `<meta>`
/// prescan as ASCII cannot be UTF-16.
#[must_use]
pub fn declared_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = &html[..html.len().min(SNIFF_LEN)];
    META_CHARSET
        .captures(head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_bytes()))
        .map(Encoding::output_encoding)
}

/// Pick the encoding of an HTML document.
///
/// Returns the encoding and the length of any byte order mark to skip.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> (&'static Encoding, usize) {
    if let Some(found) = Encoding::for_bom(html) {
        return found;
    }
    (declared_encoding(html).unwrap_or(UTF_8), 0)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use para_digest::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>";
/// assert!(decode_html(html).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let (encoding, bom_len) = sniff_encoding(html);
    let body = &html[bom_len..];

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, had_errors) = encoding.decode_without_bom_handling(body);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced undecodable bytes");
    }
    decoded.into_owned()
}
