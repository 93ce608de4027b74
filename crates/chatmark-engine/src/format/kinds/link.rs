use std::sync::OnceLock;

use regex::Regex;

use crate::format::node::Node;

/// Markdown link rule: `[label](url)` with an `http(s)` url.
pub struct MarkdownLink;

impl MarkdownLink {
    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\[(.*?)\]\((https?://[^\s)]+)\)").expect("Invalid link regex")
        })
    }

    /// Only the first occurrence on the line is rendered, and the node
    /// replaces the whole line; text outside the match is dropped. The
    /// line-is-fully-replaced behavior is deliberate, surprising as it
    /// looks.
    pub fn try_format(line: &str) -> Option<Node> {
        let caps = Self::pattern().captures(line)?;
        Some(Node::Link {
            label: caps[1].to_string(),
            href: caps[2].to_string(),
        })
    }
}

/// Bare URL rule, reached only when no markdown link matched.
pub struct BareUrl;

impl BareUrl {
    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"https?://[^\s/$.?#].[^\s]*").expect("Invalid URL regex"))
    }

    /// Uses the first matched token as the link target. Like the markdown
    /// link rule, the rest of the line is not merged into the node.
    pub fn try_format(line: &str) -> Option<Node> {
        let m = Self::pattern().find(line)?;
        Some(Node::AutoLink {
            href: m.as_str().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_link_replaces_the_line() {
        assert_eq!(
            MarkdownLink::try_format("[docs](https://example.com) and [more](https://two.example)"),
            Some(Node::Link {
                label: "docs".to_string(),
                href: "https://example.com".to_string(),
            })
        );
    }

    #[test]
    fn link_requires_http_scheme() {
        assert_eq!(MarkdownLink::try_format("[file](ftp://example.com)"), None);
        assert_eq!(MarkdownLink::try_format("[rel](/docs/page)"), None);
    }

    #[test]
    fn link_url_stops_at_whitespace_or_paren() {
        assert_eq!(
            MarkdownLink::try_format("[x](https://a.example/path) tail"),
            Some(Node::Link {
                label: "x".to_string(),
                href: "https://a.example/path".to_string(),
            })
        );
    }

    #[test]
    fn bare_url_takes_first_token() {
        assert_eq!(
            BareUrl::try_format("see https://one.example then https://two.example"),
            Some(Node::AutoLink {
                href: "https://one.example".to_string(),
            })
        );
    }

    #[test]
    fn no_url_no_match() {
        assert_eq!(BareUrl::try_format("nothing to see"), None);
    }
}
