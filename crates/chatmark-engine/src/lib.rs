//! # chatmark-engine
//!
//! Formatting engine for the markdown subset that shows up in streaming
//! chat replies. The entry point is [`format_line`]: one line of text in,
//! one structured [`Node`] out. A UI layer owns the surrounding concerns
//! (splitting a message into lines, rendering nodes, collecting the
//! footnote list) and stays out of this crate.

pub mod format;

// Re-export the public surface for easier usage
pub use format::node::{
    CodeRun, CommentRun, FootnoteEntry, FootnoteRun, Node, StyledRun, Tone,
};
pub use format::sink::FootnoteSink;
pub use format::{format_line, format_message};
