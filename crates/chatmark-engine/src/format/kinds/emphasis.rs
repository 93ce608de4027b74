//! Bold and italic rules, with depth-one mutual nesting.
//!
//! The emphasis patterns need lookbehind/lookahead the `regex` crate does
//! not offer, so the matchers here scan bytes directly. All delimiters are
//! ASCII, which keeps byte indices on `char` boundaries; continuation
//! bytes of multi-byte characters can never equal `*`, `_` or a word
//! byte, so the adjacency checks stay correct on any UTF-8 input.
//!
//! Nesting is resolved by a two-level descent only: the outer delimiter is
//! matched first, then the captured inner text is re-scanned once for the
//! opposite delimiter kind. Deeper nesting is out of scope on purpose.

use crate::format::node::{Node, StyledRun};

/// Byte offsets of one emphasis match within a line.
///
/// `start..end` covers the full match, delimiters included;
/// `inner_start..inner_end` covers the wrapped text. All four always sit
/// on ASCII delimiter positions, so slicing with them cannot split a
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisMatch {
    pub start: usize,
    pub end: usize,
    pub inner_start: usize,
    pub inner_end: usize,
}

fn is_marker_byte(b: u8) -> bool {
    b == b'*' || b == b'_'
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Finds the leftmost `**text**` wrap.
///
/// Non-greedy: the closing delimiter is the first `**` after at least one
/// inner character. The inner text may itself contain single `*` markers;
/// those are what the nested-italic re-scan later picks up.
pub fn find_bold(s: &str) -> Option<EmphasisMatch> {
    let b = s.as_bytes();
    let mut i = 0;
    // Smallest possible match is `**x**`.
    while i + 5 <= b.len() {
        if b[i] == b'*' && b[i + 1] == b'*' {
            let mut j = i + 3;
            while j + 2 <= b.len() {
                if b[j] == b'*' && b[j + 1] == b'*' {
                    return Some(EmphasisMatch {
                        start: i,
                        end: j + 2,
                        inner_start: i + 2,
                        inner_end: j,
                    });
                }
                j += 1;
            }
        }
        i += 1;
    }
    None
}

/// Finds the next single-marker italic wrap (`*text*` or `_text_`) at or
/// after `from`.
///
/// The opening marker must not repeat immediately and must not follow
/// another emphasis marker; the closing marker is the first one of the
/// same kind that is not itself followed by an emphasis marker. This is
/// what keeps `**x**` out of the italic rule's reach.
pub fn find_italic(s: &str, from: usize) -> Option<EmphasisMatch> {
    let b = s.as_bytes();
    let mut i = from;
    while i < b.len() {
        let c = b[i];
        if is_marker_byte(c)
            && (i == 0 || !is_marker_byte(b[i - 1]))
            && (i + 1 >= b.len() || b[i + 1] != c)
        {
            // Inner text needs at least one character.
            let mut j = i + 2;
            while j < b.len() {
                if b[j] == c && (j + 1 >= b.len() || !is_marker_byte(b[j + 1])) {
                    return Some(EmphasisMatch {
                        start: i,
                        end: j + 1,
                        inner_start: i + 1,
                        inner_end: j,
                    });
                }
                j += 1;
            }
        }
        i += 1;
    }
    None
}

/// Finds the next double-marker bold wrap (`**text**` or `__text__`) at or
/// after `from`, for the re-scan inside an italic match.
///
/// Unlike [`find_bold`], the delimiter must not touch a word character on
/// the outside, so `a__b__` stays plain text.
pub fn find_strong(s: &str, from: usize) -> Option<EmphasisMatch> {
    let b = s.as_bytes();
    let mut i = from;
    // Smallest possible match is `**x**` / `__x__`.
    while i + 5 <= b.len() {
        let d = b[i];
        if is_marker_byte(d) && b[i + 1] == d && (i == 0 || !is_word_byte(b[i - 1])) {
            let mut j = i + 3;
            while j + 2 <= b.len() {
                if b[j] == d && b[j + 1] == d && (j + 2 >= b.len() || !is_word_byte(b[j + 2])) {
                    return Some(EmphasisMatch {
                        start: i,
                        end: j + 2,
                        inner_start: i + 2,
                        inner_end: j,
                    });
                }
                j += 1;
            }
        }
        i += 1;
    }
    None
}

fn push_text(runs: &mut Vec<StyledRun>, text: &str) {
    if !text.is_empty() {
        runs.push(StyledRun::Text(text.to_string()));
    }
}

/// Bold rule: `**text**`, possibly containing italic.
pub struct Bold;

impl Bold {
    /// Matches the leftmost bold wrap on the line, then re-scans the
    /// captured inner text for italic runs. With no italic inside, the
    /// whole inner text becomes a single plain run.
    pub fn try_format(line: &str) -> Option<Node> {
        let m = find_bold(line)?;
        let inner = &line[m.inner_start..m.inner_end];

        let mut runs = Vec::new();
        let mut last = 0usize;
        let mut from = 0usize;
        while let Some(it) = find_italic(inner, from) {
            push_text(&mut runs, &inner[last..it.start]);
            runs.push(StyledRun::Italic(
                inner[it.inner_start..it.inner_end].to_string(),
            ));
            last = it.end;
            from = it.end;
        }

        if runs.is_empty() {
            runs.push(StyledRun::Text(inner.to_string()));
        } else {
            push_text(&mut runs, &inner[last..]);
        }
        Some(Node::Bold { runs })
    }
}

/// Italic rule: `*text*` or `_text_`, possibly containing bold.
///
/// Only reached when the bold rule did not match the line.
pub struct Italic;

impl Italic {
    pub fn try_format(line: &str) -> Option<Node> {
        let m = find_italic(line, 0)?;
        let inner = &line[m.inner_start..m.inner_end];

        let mut runs = Vec::new();
        let mut last = 0usize;
        let mut from = 0usize;
        while let Some(bm) = find_strong(inner, from) {
            push_text(&mut runs, &inner[last..bm.start]);
            runs.push(StyledRun::Bold(
                inner[bm.inner_start..bm.inner_end].to_string(),
            ));
            last = bm.end;
            from = bm.end;
        }

        if runs.is_empty() {
            runs.push(StyledRun::Text(inner.to_string()));
        } else {
            push_text(&mut runs, &inner[last..]);
        }
        Some(Node::Italic { runs })
    }
}
