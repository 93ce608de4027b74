use crate::format::node::Node;

/// Blockquote rule: `>` at line start, then whitespace, then text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// No leading whitespace is allowed before the prefix, and the prefix
    /// must be followed by at least one whitespace character, so `>>` and
    /// `>bare` fall through to later rules.
    pub fn try_format(line: &str) -> Option<Node> {
        let rest = line.strip_prefix(Self::PREFIX)?;
        let text = rest.trim_start();
        if text.len() == rest.len() || text.is_empty() {
            return None;
        }
        Some(Node::BlockQuote {
            text: text.to_string(),
        })
    }
}
