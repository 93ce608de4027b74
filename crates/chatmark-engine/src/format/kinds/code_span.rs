use std::sync::OnceLock;

use regex::Regex;

use crate::format::node::{CodeRun, Node, Tone};

/// Inline code span rule.
///
/// Code spans are backtick-delimited, non-greedy and non-nested. A span
/// must have at least one character between the backticks, so a stray
/// pair of adjacent backticks does not match.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';

    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"))
    }

    /// Splits the line into alternating plain and code runs, left to right.
    ///
    /// The plain run before each span is kept even when empty, so the first
    /// run of a line starting with a span is `Text("")`. An empty run after
    /// the last span is dropped. Code text is trimmed of surrounding
    /// whitespace; the delimiters belong to no run.
    pub fn try_format(line: &str, tone: Tone) -> Option<Node> {
        let mut runs = Vec::new();
        let mut last = 0usize;

        for m in Self::pattern().find_iter(line) {
            runs.push(CodeRun::Text(line[last..m.start()].to_string()));
            let inner = &line[m.start() + Self::TICK.len_utf8()..m.end() - Self::TICK.len_utf8()];
            runs.push(CodeRun::Code {
                text: inner.trim().to_string(),
                tone,
            });
            last = m.end();
        }

        if runs.is_empty() {
            return None;
        }
        if last < line.len() {
            runs.push(CodeRun::Text(line[last..].to_string()));
        }
        Some(Node::CodeLine { runs })
    }
}
