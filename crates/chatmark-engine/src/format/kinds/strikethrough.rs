use std::sync::OnceLock;

use regex::Regex;

use crate::format::node::Node;

/// Strikethrough rule: the whole line wrapped in `~~`, surrounding
/// whitespace aside. A `~~..~~` substring in the middle of other text is
/// not enough and falls through.
pub struct Strikethrough;

impl Strikethrough {
    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^\s*~~(.*?)~~\s*$").expect("Invalid strikethrough regex"))
    }

    pub fn try_format(line: &str) -> Option<Node> {
        let caps = Self::pattern().captures(line)?;
        Some(Node::Strikethrough {
            text: caps[1].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_line_match() {
        assert_eq!(
            Strikethrough::try_format("~~gone~~"),
            Some(Node::Strikethrough {
                text: "gone".to_string(),
            })
        );
    }

    #[test]
    fn surrounding_whitespace_is_fine() {
        assert_eq!(
            Strikethrough::try_format("  ~~gone~~ "),
            Some(Node::Strikethrough {
                text: "gone".to_string(),
            })
        );
    }

    #[test]
    fn substring_only_does_not_match() {
        assert_eq!(Strikethrough::try_format("not ~~all~~ strike"), None);
    }

    #[test]
    fn inner_tildes_extend_the_match() {
        assert_eq!(
            Strikethrough::try_format("~~a~~b~~"),
            Some(Node::Strikethrough {
                text: "a~~b".to_string(),
            })
        );
    }
}
