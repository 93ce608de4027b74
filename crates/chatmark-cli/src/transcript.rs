//! Transcript file parsing.
//!
//! A transcript is plain text where a header line names the speaker of
//! everything that follows, until the next header:
//!
//! ```text
//! @user
//! Best JS array method?
//! @assistant
//! The `map()` method is often considered the best.
//! ```

use chatmark_engine::Tone;

/// Header line opening an assistant message.
pub const ASSISTANT_HEADER: &str = "@assistant";
/// Header line opening a user message.
pub const USER_HEADER: &str = "@user";

/// One message of a transcript, body kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub tone: Tone,
    pub body: String,
}

/// Splits a transcript into messages. Lines before the first header have
/// no speaker and are skipped.
pub fn parse_transcript(text: &str) -> Vec<Message> {
    let mut messages = Vec::new();
    let mut current: Option<(Tone, Vec<&str>)> = None;

    for line in text.lines() {
        let header = match line.trim_end() {
            ASSISTANT_HEADER => Some(Tone::Assistant),
            USER_HEADER => Some(Tone::User),
            _ => None,
        };
        match header {
            Some(tone) => {
                flush(&mut messages, current.take());
                current = Some((tone, Vec::new()));
            }
            None => {
                if let Some((_, body)) = &mut current {
                    body.push(line);
                }
            }
        }
    }
    flush(&mut messages, current.take());
    messages
}

fn flush(messages: &mut Vec<Message>, current: Option<(Tone, Vec<&str>)>) {
    if let Some((tone, body)) = current {
        messages.push(Message {
            tone,
            body: body.join("\n"),
        });
    }
}
