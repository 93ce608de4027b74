use std::sync::OnceLock;

use regex::Regex;

use crate::format::node::{CommentRun, Node};

/// Comment span rule for the three comment shapes that show up in code
/// talk: block (`/* .. */`), line (`// ..` to end of line) and markup
/// (`<!-- .. -->`).
pub struct Comment;

impl Comment {
    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"/\s*\*\s*(.*?)\s*\*\s*/|//\s*(.*?)\s*$|<!--\s*(.*?)\s*-->")
                .expect("Invalid comment regex")
        })
    }

    /// Splits the line into plain and comment runs, left to right, with the
    /// same run bookkeeping as the code span rule.
    ///
    /// Each comment run carries the raw matched substring for display, and
    /// separately the delimiter-stripped trimmed body. Display keeps the
    /// delimiters; the stripped body is there for renderers that want it.
    pub fn try_format(line: &str) -> Option<Node> {
        let re = Self::pattern();
        let mut runs = Vec::new();
        let mut last = 0usize;

        for caps in re.captures_iter(line) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let body = caps
                .get(1)
                .or_else(|| caps.get(2))
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or("");

            runs.push(CommentRun::Text(line[last..whole.start()].to_string()));
            runs.push(CommentRun::Comment {
                display: whole.as_str().to_string(),
                text: body.to_string(),
            });
            last = whole.end();
        }

        if runs.is_empty() {
            return None;
        }
        if last < line.len() {
            runs.push(CommentRun::Text(line[last..].to_string()));
        }
        Some(Node::CommentLine { runs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> CommentRun {
        CommentRun::Text(s.to_string())
    }

    fn comment(display: &str, body: &str) -> CommentRun {
        CommentRun::Comment {
            display: display.to_string(),
            text: body.to_string(),
        }
    }

    #[test]
    fn line_comment_runs_to_end_of_line() {
        assert_eq!(
            Comment::try_format("int x; // counter"),
            Some(Node::CommentLine {
                runs: vec![text("int x; "), comment("// counter", "counter")],
            })
        );
    }

    #[test]
    fn block_comment_keeps_surrounding_text() {
        assert_eq!(
            Comment::try_format("a /* b */ c"),
            Some(Node::CommentLine {
                runs: vec![text("a "), comment("/* b */", "b"), text(" c")],
            })
        );
    }

    #[test]
    fn markup_comment_at_line_start_keeps_empty_leading_run() {
        assert_eq!(
            Comment::try_format("<!-- note -->"),
            Some(Node::CommentLine {
                runs: vec![text(""), comment("<!-- note -->", "note")],
            })
        );
    }

    #[test]
    fn block_delimiters_may_be_spaced_out() {
        assert_eq!(
            Comment::try_format("/ * x * /"),
            Some(Node::CommentLine {
                runs: vec![text(""), comment("/ * x * /", "x")],
            })
        );
    }

    #[test]
    fn display_keeps_raw_match_while_body_is_stripped() {
        assert_eq!(
            Comment::try_format("end //   spaced out  "),
            Some(Node::CommentLine {
                runs: vec![text("end "), comment("//   spaced out  ", "spaced out")],
            })
        );
    }

    #[test]
    fn plain_text_is_not_a_comment() {
        assert_eq!(Comment::try_format("no comment here"), None);
    }
}
