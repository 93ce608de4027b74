//! # Line Formatting
//!
//! Converts one line of chat text into a structured [`Node`] by trying a
//! fixed sequence of pattern rules and stopping at the first match.
//!
//! ## Architecture
//!
//! Formatting is line-local. Every call takes an immutable line and returns
//! a freshly built node; no matcher state survives between invocations, so
//! callers may format lines concurrently as long as each call's footnote
//! sink is private to it or safe to share. The only cross-line effect is
//! the footnote sink, and it is additive-only.
//!
//! Streaming callers re-run [`format_line`] on the growing last line as
//! chunks arrive. There is no notion of a partial line here; input is
//! always treated as a complete line and re-evaluated from scratch.
//!
//! ## Modules
//!
//! - **`node`**: the [`Node`] sum type and its sub-span run types
//! - **`kinds`**: one module per rule, each owning its pattern knowledge
//! - **`sink`**: the [`FootnoteSink`] abstraction for the side channel
//!
//! ## Precedence
//!
//! Heading, code spans, bold, italic, bullet item, numbered item, link,
//! bare URL, comments, blockquote, footnote, strikethrough, fence open,
//! fence close, plain fallback. Malformed or unbalanced markup never
//! fails; it simply does not match and falls through to a later rule, with
//! the plain-line fallback catching everything else (the empty line
//! included).

pub mod kinds;
pub mod node;
pub mod sink;


use kinds::{
    BareUrl, BlockQuote, Bold, BulletList, CodeFence, CodeSpan, Comment, Footnote, Heading, Italic,
    MarkdownLink, NumberedList, Strikethrough,
};
use node::{Node, Tone};
use sink::FootnoteSink;

/// Formats one line of chat text into a [`Node`].
///
/// The first rule whose pattern matches wins; later rules are not
/// attempted. Footnote occurrences append a [`FootnoteEntry`] to `sink`
/// (when one is given) in left-to-right order; the substitution in the
/// returned node happens either way.
///
/// [`FootnoteEntry`]: node::FootnoteEntry
pub fn format_line(line: &str, tone: Tone, sink: Option<&mut (dyn FootnoteSink + '_)>) -> Node {
    if let Some(n) = Heading::try_format(line) {
        return n;
    }
    if let Some(n) = CodeSpan::try_format(line, tone) {
        return n;
    }
    if let Some(n) = Bold::try_format(line) {
        return n;
    }
    if let Some(n) = Italic::try_format(line) {
        return n;
    }
    if let Some(n) = BulletList::try_format(line) {
        return n;
    }
    if let Some(n) = NumberedList::try_format(line) {
        return n;
    }
    if let Some(n) = MarkdownLink::try_format(line) {
        return n;
    }
    if let Some(n) = BareUrl::try_format(line) {
        return n;
    }
    if let Some(n) = Comment::try_format(line) {
        return n;
    }
    if let Some(n) = BlockQuote::try_format(line) {
        return n;
    }
    if let Some(n) = Footnote::try_format(line, sink) {
        return n;
    }
    if let Some(n) = Strikethrough::try_format(line) {
        return n;
    }
    if let Some(n) = CodeFence::try_open(line) {
        return n;
    }
    if let Some(n) = CodeFence::try_close(line) {
        return n;
    }
    Node::Plain {
        text: line.to_string(),
    }
}

/// Formats a whole message blob, one node per `\n`-separated line.
///
/// Lines are formatted in order and share the footnote sink, so entries
/// accumulate across the message in encounter order.
pub fn format_message(text: &str, tone: Tone, mut sink: Option<&mut dyn FootnoteSink>) -> Vec<Node> {
    let mut nodes = Vec::new();
    for line in text.split('\n') {
        nodes.push(format_line(line, tone, sink.as_deref_mut()));
    }
    nodes
}
