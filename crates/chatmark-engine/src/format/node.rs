use serde::{Deserialize, Serialize};

/// Styling hint carried through to code spans so the presentation layer can
/// pick the right variant for assistant and user bubbles.
///
/// The tone never influences which rule matches a line; it is attached to
/// the output and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    /// Message produced by the model ("ai" in the wire format).
    Assistant,
    /// Message typed by the person ("user" in the wire format).
    User,
}

/// The formatted shape of one line of chat text.
///
/// Exactly one variant is produced per input line. The variant is chosen by
/// the fixed rule order in [`format_line`]; the first rule whose pattern
/// matches wins and later rules are never attempted.
///
/// [`format_line`]: crate::format::format_line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// ATX heading, `#` through `######`.
    Heading { level: u8, text: String },
    /// Line containing one or more backtick code spans, split into runs.
    CodeLine { runs: Vec<CodeRun> },
    /// Double-asterisk bold wrap, possibly with italic runs nested inside.
    Bold { runs: Vec<StyledRun> },
    /// Single-marker italic wrap, possibly with bold runs nested inside.
    Italic { runs: Vec<StyledRun> },
    /// Bullet list item (`-`, `*` or `+` marker). Item text only; grouping
    /// consecutive items into one list is a caller concern.
    BulletItem { text: String },
    /// Numbered list item. Keeps the whole matched line as its text, marker
    /// included.
    NumberedItem { text: String },
    /// First `[label](url)` occurrence on the line. The node replaces the
    /// whole line; text outside the match is dropped.
    Link { label: String, href: String },
    /// First bare `http(s)://` token on the line. Trailing text is likewise
    /// not merged into the node.
    AutoLink { href: String },
    /// Line containing block, line or markup comments, split into runs.
    CommentLine { runs: Vec<CommentRun> },
    /// `> ` quoted line.
    BlockQuote { text: String },
    /// Line with `^[text]` / `[^text]` occurrences substituted by reference
    /// markers.
    FootnoteLine { runs: Vec<FootnoteRun> },
    /// Whole line wrapped in `~~`, after trimming.
    Strikethrough { text: String },
    /// Opening code fence with a language tag, as seen mid-stream before
    /// the body of the block has arrived.
    FenceOpen { lang: String },
    /// Line ending in a closing code fence.
    FenceClose,
    /// Fallback. Rendered as preformatted text, whitespace kept.
    Plain { text: String },
}

/// One run of a [`Node::CodeLine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CodeRun {
    /// Plain text between code spans. The run before a span is kept even
    /// when empty; an empty run after the last span is dropped.
    Text(String),
    /// A backtick span, delimiters stripped and content trimmed.
    Code { text: String, tone: Tone },
}

/// One run of a [`Node::CommentLine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommentRun {
    /// Plain text between comments.
    Text(String),
    /// A comment span. `display` is the raw matched substring with its
    /// delimiters still in place; `text` is the delimiter-stripped, trimmed
    /// body. Renderers show `display`.
    Comment { display: String, text: String },
}

/// One run of a [`Node::Bold`] or [`Node::Italic`].
///
/// Nesting is depth-one by construction: a `Bold` node only ever contains
/// `Text` and `Italic` runs, an `Italic` node only `Text` and `Bold` runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyledRun {
    Text(String),
    Bold(String),
    Italic(String),
}

/// One run of a [`Node::FootnoteLine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FootnoteRun {
    /// Text between footnote occurrences, preserved verbatim.
    Text(String),
    /// A substituted occurrence. Renderers show `text` followed by a
    /// superscripted `[id]`.
    Reference { text: String, id: String },
}

/// Side-channel record appended to the caller's footnote sink for every
/// footnote occurrence, in encounter order.
///
/// Created while formatting a single line and never mutated afterward; the
/// caller owns the collection for the lifetime of the rendered message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootnoteEntry {
    pub reference_id: String,
    pub text: String,
}
