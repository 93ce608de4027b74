use anyhow::{Context, Result};
use chatmark_config::Config;
use chatmark_engine::{FootnoteEntry, Tone, format_message};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use std::{env, fs, io::stdout, path::PathBuf, process};

mod render;
mod transcript;

struct App {
    lines: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(messages: &[transcript::Message], show_footnotes: bool) -> Self {
        Self {
            lines: build_lines(messages, show_footnotes),
            scroll: 0,
        }
    }

    fn scroll_down(&mut self, amount: u16) {
        let max = self.lines.len().saturating_sub(1) as u16;
        self.scroll = self.scroll.saturating_add(amount).min(max);
    }

    fn scroll_up(&mut self, amount: u16) {
        self.scroll = self.scroll.saturating_sub(amount);
    }
}

fn speaker_line(tone: Tone) -> Line<'static> {
    let (label, color) = match tone {
        Tone::Assistant => ("assistant", Color::Magenta),
        Tone::User => ("you", Color::Blue),
    };
    Line::from(Span::styled(
        format!("── {label} ──"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn build_lines(messages: &[transcript::Message], show_footnotes: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in messages {
        lines.push(speaker_line(message.tone));

        let mut notes: Vec<FootnoteEntry> = Vec::new();
        let nodes = format_message(&message.body, message.tone, Some(&mut notes));
        lines.extend(render::message_to_lines(&nodes));

        if show_footnotes && !notes.is_empty() {
            lines.extend(render::footnotes_to_lines(&notes));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn main() -> Result<()> {
    // Determine transcript path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let transcript_path;
    let show_footnotes;

    if args.len() == 2 {
        transcript_path = PathBuf::from(&args[1]);
        show_footnotes = match Config::load() {
            Ok(Some(config)) => config.show_footnotes,
            _ => true,
        };
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                transcript_path = config.transcript_path;
                show_footnotes = config.show_footnotes;
            }
            Ok(None) => {
                eprintln!("Error: No transcript provided and no config file found");
                eprintln!("Usage: {} <transcript-file>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <transcript-file>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [transcript-file]", args[0]);
        process::exit(1);
    };

    let text = fs::read_to_string(&transcript_path)
        .with_context(|| format!("reading transcript '{}'", transcript_path.display()))?;
    let messages = transcript::parse_transcript(&text);
    if messages.is_empty() {
        eprintln!(
            "Error: '{}' holds no messages (expected {} / {} headers)",
            transcript_path.display(),
            transcript::ASSISTANT_HEADER,
            transcript::USER_HEADER,
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&messages, show_footnotes);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
                KeyCode::PageDown => app.scroll_down(10),
                KeyCode::PageUp => app.scroll_up(10),
                KeyCode::Home | KeyCode::Char('g') => app.scroll = 0,
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let conversation = Paragraph::new(app.lines.clone())
        .scroll((app.scroll, 0))
        .wrap(Wrap { trim: false });
    f.render_widget(conversation, chunks[0]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Scroll | "),
        Span::raw("PgUp/PgDn: Page | "),
        Span::raw("g: Top"),
    ]));
    f.render_widget(help, chunks[1]);
}
