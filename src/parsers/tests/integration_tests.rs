use crate::error::Error;
use crate::parsers::{parse_link, parse_link_bytes};
use crate::results::ParsedLink;

#[cfg(test)]
mod tests {
    use super::*;

    fn link(url: &str, text: &str) -> ParsedLink {
        ParsedLink::new(url.to_string(), text.to_string())
    }

    #[test]
    fn test_surrounding_text_ignored() {
        let result = parse_link("things <a href=\"/foo/bar.html\">Foo</a> stuff");
        assert_eq!(result, link("/foo/bar.html", "Foo"));
    }

    #[test]
    fn test_no_anchor() {
        for html in ["", "plain text", "<p>para</p>", "<abbr href=\"/x\">x</abbr>"] {
            assert_eq!(parse_link(html), ParsedLink::default(), "input {:?}", html);
        }
    }

    #[test]
    fn test_second_anchor_ignored() {
        let result = parse_link("<a href=\"/x\">A</a><a href=\"/y\">B</a>");
        assert_eq!(result, link("/x", "A"));
    }

    #[test]
    fn test_anchor_without_href() {
        let result = parse_link("<a>no href here</a>");
        assert_eq!(result, link("", "no href here"));
    }

    #[test]
    fn test_nested_anchors() {
        let result = parse_link("<a href=\"/x\"><a href=\"/y\">nested</a></a>");
        assert_eq!(result, link("/x", ""));
    }

    #[test]
    fn test_uppercase_tag_and_attribute() {
        let result = parse_link("<A HREF=\"/up\">Up</A>");
        assert_eq!(result, link("/up", "Up"));
    }

    #[test]
    fn test_stray_close_before_anchor() {
        let result = parse_link("</a>orphan<a href=\"/x\">A</a>");
        assert_eq!(result, link("", "orphan"));
    }

    #[test]
    fn test_text_after_nested_tag_wins() {
        let result = parse_link("<a href=\"/x\">foo<b>bar</b>baz</a>");
        assert_eq!(result, link("/x", "baz"));
    }

    #[test]
    fn test_multiline_text_kept_whole() {
        let result = parse_link("<a href=\"/x\">first\nsecond</a>");
        assert_eq!(result, link("/x", "first\nsecond"));
    }

    #[test]
    fn test_self_closing_anchor() {
        let result = parse_link("<a href=\"/x\"/>after");
        assert_eq!(result, link("/x", ""));
    }

    #[test]
    fn test_unclosed_anchor() {
        let result = parse_link("<a href=\"/x\">unterminated");
        assert_eq!(result, link("/x", "unterminated"));
    }

    #[test]
    fn test_truncated_tag_does_not_fail() {
        assert_eq!(parse_link("<a href=\"/x\""), ParsedLink::default());
    }

    #[test]
    fn test_character_references_decoded_by_tokenizer() {
        let result = parse_link("<a href=\"/q?a=1&amp;b=2\">Tom &amp; Jerry</a>");
        assert_eq!(result, link("/q?a=1&b=2", "Tom & Jerry"));
    }

    #[test]
    fn test_idempotent() {
        let html = "<div><a class=\"c\" href=\"https://example.com\">Example</a></div>";
        assert_eq!(parse_link(html), parse_link(html));
    }

    #[test]
    fn test_bytes_input() {
        let result = parse_link_bytes(b"<a href=\"/x\">A</a>").unwrap();
        assert_eq!(result, link("/x", "A"));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let err = parse_link_bytes(&[b'<', b'a', b'>', 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, Error::InputEncoding(_)));
    }
}
