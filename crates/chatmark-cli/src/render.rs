//! Maps formatted nodes to styled terminal lines.
//!
//! This is the presentation side of the engine boundary: every [`Node`]
//! variant gets a concrete look here, and nothing in the engine knows
//! about it.

use chatmark_engine::{CodeRun, CommentRun, FootnoteEntry, FootnoteRun, Node, StyledRun, Tone};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

fn code_style(tone: Tone) -> Style {
    match tone {
        Tone::Assistant => Style::default().fg(Color::Yellow),
        Tone::User => Style::default().fg(Color::Cyan),
    }
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED)
}

/// Renders one node as terminal lines (one line per node today; the
/// return type leaves room for block nodes that need more).
pub fn node_to_lines(node: &Node) -> Vec<Line<'static>> {
    let line = match node {
        Node::Heading { level, text } => Line::from(Span::styled(
            format!("{} {}", "#".repeat(*level as usize), text),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Node::CodeLine { runs } => Line::from(
            runs.iter()
                .map(|run| match run {
                    CodeRun::Text(text) => Span::raw(text.clone()),
                    CodeRun::Code { text, tone } => Span::styled(text.clone(), code_style(*tone)),
                })
                .collect::<Vec<_>>(),
        ),
        Node::Bold { runs } => {
            let bold = Style::default().add_modifier(Modifier::BOLD);
            Line::from(
                runs.iter()
                    .map(|run| match run {
                        StyledRun::Text(text) | StyledRun::Bold(text) => {
                            Span::styled(text.clone(), bold)
                        }
                        StyledRun::Italic(text) => {
                            Span::styled(text.clone(), bold.add_modifier(Modifier::ITALIC))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        }
        Node::Italic { runs } => {
            let italic = Style::default().add_modifier(Modifier::ITALIC);
            Line::from(
                runs.iter()
                    .map(|run| match run {
                        StyledRun::Text(text) | StyledRun::Italic(text) => {
                            Span::styled(text.clone(), italic)
                        }
                        StyledRun::Bold(text) => {
                            Span::styled(text.clone(), italic.add_modifier(Modifier::BOLD))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        }
        Node::BulletItem { text } => Line::from(format!("• {text}")),
        Node::NumberedItem { text } => Line::from(text.clone()),
        Node::Link { label, href } => Line::from(vec![
            Span::styled(label.clone(), link_style()),
            Span::raw(" ("),
            Span::styled(href.clone(), Style::default().add_modifier(Modifier::DIM)),
            Span::raw(")"),
        ]),
        Node::AutoLink { href } => Line::from(Span::styled(href.clone(), link_style())),
        Node::CommentLine { runs } => Line::from(
            runs.iter()
                .map(|run| match run {
                    CommentRun::Text(text) => Span::raw(text.clone()),
                    CommentRun::Comment { display, .. } => {
                        Span::styled(display.clone(), Style::default().fg(Color::Green))
                    }
                })
                .collect::<Vec<_>>(),
        ),
        Node::BlockQuote { text } => Line::from(Span::styled(
            format!("▌ {text}"),
            Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
        )),
        Node::FootnoteLine { runs } => Line::from(
            runs.iter()
                .flat_map(|run| match run {
                    FootnoteRun::Text(text) => vec![Span::raw(text.clone())],
                    FootnoteRun::Reference { text, id } => vec![
                        Span::raw(text.clone()),
                        Span::styled(
                            format!("[{id}]"),
                            Style::default().fg(Color::Blue).add_modifier(Modifier::DIM),
                        ),
                    ],
                })
                .collect::<Vec<_>>(),
        ),
        Node::Strikethrough { text } => Line::from(Span::styled(
            text.clone(),
            Style::default().add_modifier(Modifier::CROSSED_OUT),
        )),
        Node::FenceOpen { lang } => Line::from(Span::styled(
            lang.clone(),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        )),
        Node::FenceClose => Line::from(Span::styled(
            "────────".to_string(),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Node::Plain { text } => Line::from(text.clone()),
    };
    vec![line]
}

/// Renders a whole formatted message.
pub fn message_to_lines(nodes: &[Node]) -> Vec<Line<'static>> {
    nodes.iter().flat_map(node_to_lines).collect()
}

/// Renders the consolidated footnote list shown under a message.
pub fn footnotes_to_lines(notes: &[FootnoteEntry]) -> Vec<Line<'static>> {
    notes
        .iter()
        .map(|note| {
            Line::from(Span::styled(
                format!("[{}] {}", note.reference_id, note.text),
                Style::default().add_modifier(Modifier::DIM),
            ))
        })
        .collect()
}
