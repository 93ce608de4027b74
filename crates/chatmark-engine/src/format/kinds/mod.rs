//! # Rule Kinds
//!
//! One module per formatting rule, each owning its own pattern knowledge.
//! Delimiter constants and compiled patterns live with the rule they
//! belong to, never in the dispatch code.
//!
//! Most rules compile their pattern once into a `OnceLock`-cached
//! [`regex::Regex`]. The two emphasis matchers need lookaround semantics
//! that `regex` does not provide, so [`emphasis`] scans bytes by hand
//! instead.

pub mod block_quote;
pub mod code_fence;
pub mod code_span;
pub mod comment;
pub mod emphasis;
pub mod footnote;
pub mod heading;
pub mod link;
pub mod list;
pub mod strikethrough;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use code_span::CodeSpan;
pub use comment::Comment;
pub use emphasis::{Bold, Italic};
pub use footnote::Footnote;
pub use heading::Heading;
pub use link::{BareUrl, MarkdownLink};
pub use list::{BulletList, NumberedList};
pub use strikethrough::Strikethrough;
