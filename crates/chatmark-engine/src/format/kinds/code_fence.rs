use std::sync::OnceLock;

use regex::Regex;

use crate::format::node::Node;

/// Code fence rules for streamed replies.
///
/// A fenced block arrives one line at a time, so the opener and the closer
/// are classified independently. The opener is only recognized while the
/// language tag is directly attached (the shape a partial stream shows);
/// a bare fence line is a closer.
pub struct CodeFence;

impl CodeFence {
    /// The fence delimiter.
    pub const FENCE: &'static str = "```";

    fn open_pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"```(\w+)").expect("Invalid fence regex"))
    }

    /// Matches a fence immediately followed by a word-character language
    /// tag, anywhere on the line.
    pub fn try_open(line: &str) -> Option<Node> {
        let caps = Self::open_pattern().captures(line)?;
        Some(Node::FenceOpen {
            lang: caps[1].to_string(),
        })
    }

    /// Matches any line ending in a fence, trailing content allowed.
    pub fn try_close(line: &str) -> Option<Node> {
        line.ends_with(Self::FENCE).then_some(Node::FenceClose)
    }
}
