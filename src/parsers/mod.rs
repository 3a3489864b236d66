pub mod anchor;
pub mod html;

#[cfg(test)]
mod tests;

use crate::error::Result;
use crate::results::ParsedLink;
use anchor::AnchorExtractor;

/// A single event produced while scanning markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupEvent {
    /// Opening tag with its attributes in document order
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
    },
    /// Closing tag
    EndTag { name: String },
    /// A run of text between two pieces of markup
    Text(String),
}

/// Parses an HTML fragment, returning the href and content text of the first
/// anchor tag. Anything before or after the anchor is ignored.
///
/// This never fails: a fragment without an anchor gives an empty result.
pub fn parse_link(html: &str) -> ParsedLink {
    let events = html::tokenize(html);
    let link = AnchorExtractor::extract(&events);

    ::log::debug!(
        "Anchor parser scanned {} events, url={:?} text={:?}",
        events.len(),
        link.url(),
        link.text()
    );

    link
}

/// Same as [`parse_link`] for raw bytes, which must be valid UTF-8
pub fn parse_link_bytes(html: &[u8]) -> Result<ParsedLink> {
    let html = std::str::from_utf8(html)?;
    Ok(parse_link(html))
}
