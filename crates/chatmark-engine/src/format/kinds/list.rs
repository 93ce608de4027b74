use std::sync::OnceLock;

use regex::Regex;

use crate::format::node::Node;

/// Bullet list item rule (`-`, `*` or `+` marker).
///
/// Classification is per-line; turning consecutive items into one semantic
/// list is left to whoever renders the message.
pub struct BulletList;

impl BulletList {
    /// Marker characters that open a bullet item.
    pub const MARKERS: [char; 3] = ['-', '*', '+'];

    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^\s*[-*+]\s+(.+)").expect("Invalid bullet list regex"))
    }

    pub fn try_format(line: &str) -> Option<Node> {
        let caps = Self::pattern().captures(line)?;
        Some(Node::BulletItem {
            text: caps[1].to_string(),
        })
    }
}

/// Numbered list item rule.
///
/// The whole matched line is kept as the item text, marker included; only
/// the classification changes.
pub struct NumberedList;

impl NumberedList {
    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^\s*\d+\s*\.\s*.*$").expect("Invalid numbered list regex"))
    }

    pub fn try_format(line: &str) -> Option<Node> {
        if !Self::pattern().is_match(line) {
            return None;
        }
        Some(Node::NumberedItem {
            text: line.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bullet_markers() {
        for marker in BulletList::MARKERS {
            let line = format!("{marker} item one");
            assert_eq!(
                BulletList::try_format(&line),
                Some(Node::BulletItem {
                    text: "item one".to_string(),
                })
            );
        }
    }

    #[test]
    fn bullet_requires_space_after_marker() {
        assert_eq!(BulletList::try_format("-no space"), None);
    }

    #[test]
    fn numbered_item_keeps_whole_line() {
        assert_eq!(
            NumberedList::try_format("2. second"),
            Some(Node::NumberedItem {
                text: "2. second".to_string(),
            })
        );
    }

    #[test]
    fn numbered_marker_spacing_is_loose() {
        assert_eq!(
            NumberedList::try_format("  10 .  spaced"),
            Some(Node::NumberedItem {
                text: "  10 .  spaced".to_string(),
            })
        );
    }

    #[test]
    fn numbered_requires_a_dot() {
        assert_eq!(NumberedList::try_format("2 items left"), None);
    }
}
