use std::sync::OnceLock;

use regex::Regex;

use crate::format::node::Node;

/// ATX heading rule.
pub struct Heading;

impl Heading {
    /// Deepest heading level that still renders as a heading.
    pub const MAX_LEVEL: usize = 6;

    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^\s*(#{1,6})\s+(.+)$").expect("Invalid heading regex"))
    }

    /// Matches `# text` through `###### text`, with optional leading
    /// whitespace before the hash run.
    ///
    /// At least one whitespace character must separate the hashes from the
    /// text. A run of seven or more hashes leaves a `#` where that
    /// separator would be, so it never matches here and falls through to
    /// later rules. The captured text is kept verbatim, inner markup
    /// included.
    pub fn try_format(line: &str) -> Option<Node> {
        let caps = Self::pattern().captures(line)?;
        Some(Node::Heading {
            level: caps[1].len() as u8,
            text: caps[2].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn levels_follow_hash_count() {
        for level in 1..=Heading::MAX_LEVEL {
            let line = format!("{} Title", "#".repeat(level));
            assert_eq!(
                Heading::try_format(&line),
                Some(Node::Heading {
                    level: level as u8,
                    text: "Title".to_string(),
                })
            );
        }
    }

    #[test]
    fn leading_whitespace_allowed() {
        assert_eq!(
            Heading::try_format("  ## Indented"),
            Some(Node::Heading {
                level: 2,
                text: "Indented".to_string(),
            })
        );
    }

    #[test]
    fn seven_hashes_is_not_a_heading() {
        assert_eq!(Heading::try_format("####### too deep"), None);
    }

    #[test]
    fn separator_whitespace_required() {
        assert_eq!(Heading::try_format("#not-a-heading"), None);
    }

    #[test]
    fn hashes_alone_do_not_match() {
        assert_eq!(Heading::try_format("###"), None);
    }

    #[test]
    fn inner_markup_kept_verbatim() {
        assert_eq!(
            Heading::try_format("### A `code` title"),
            Some(Node::Heading {
                level: 3,
                text: "A `code` title".to_string(),
            })
        );
    }
}
