use std::sync::OnceLock;

use regex::Regex;

use crate::format::node::{FootnoteEntry, FootnoteRun, Node};
use crate::format::sink::FootnoteSink;

/// Footnote rule: `^[text]` and `[^text]` are the same syntax written in
/// either order.
///
/// Unlike the single-shot link rules, every occurrence on the line is
/// substituted, and each one appends an entry to the caller's sink so a
/// consolidated footnote list can be rendered elsewhere.
pub struct Footnote;

impl Footnote {
    fn pattern() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"\^\[([^\]]+)\]|\[\^([^\]]+)\]").expect("Invalid footnote regex")
        })
    }

    /// Substitutes each occurrence with a reference run carrying the
    /// captured text and its trimmed form as the reference id. Entries go
    /// to the sink in left-to-right order; with no sink the substitution
    /// still happens and nothing is recorded.
    pub fn try_format(line: &str, mut sink: Option<&mut (dyn FootnoteSink + '_)>) -> Option<Node> {
        let re = Self::pattern();
        let mut runs = Vec::new();
        let mut last = 0usize;

        for caps in re.captures_iter(line) {
            let whole = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            let text = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or("");
            let id = text.trim().to_string();

            if whole.start() > last {
                runs.push(FootnoteRun::Text(line[last..whole.start()].to_string()));
            }
            if let Some(s) = sink.as_deref_mut() {
                s.record(FootnoteEntry {
                    reference_id: id.clone(),
                    text: text.to_string(),
                });
            }
            runs.push(FootnoteRun::Reference {
                text: text.to_string(),
                id,
            });
            last = whole.end();
        }

        if runs.is_empty() {
            return None;
        }
        if last < line.len() {
            runs.push(FootnoteRun::Text(line[last..].to_string()));
        }
        Some(Node::FootnoteLine { runs })
    }
}
