//! termfolio - terminal-styled personal portfolio
//!
//! Hosts the terminal emulator widget in a raw-mode session: a scrollback
//! seeded with a greeting and ASCII banner, a prompt line, and a small
//! canned command vocabulary. F1/F2/F3 replay the help, contact, and resume
//! commands; Esc, Ctrl+C, or Ctrl+D leave.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use tracing::info;
use unicode_display_width::width;

use termfolio::commands::{CommandKind, CommandSet};
use termfolio::config::Config;
use termfolio::display::renderer::{render_screen, RenderConfig};
use termfolio::history::HistoryEntry;
use termfolio::input::InputEvent;
use termfolio::terminal::Terminal;

const HINT: &str = "F1 help   F2 contact   F3 resume   Esc quit";

/// Terminal-styled personal portfolio
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "termfolio.toml")]
    config: String,

    /// Override the configured prompt
    #[arg(long)]
    prompt: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("termfolio=warn".parse()?),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = Config::load(&args.config).context("failed to load configuration")?;
    if let Some(prompt) = args.prompt {
        config.prompt = prompt;
    }

    let (cols, _) = size().unwrap_or((80, 24));
    let mut term = build_widget(&config, cols);

    info!("starting termfolio session");
    run(&mut term)
}

/// Assemble the widget from config, substituting the banner fallback when
/// the terminal is too narrow for the ASCII art
fn build_widget(config: &Config, cols: u16) -> Terminal {
    let banner_width = config.banner.lines().map(width).max().unwrap_or(0);
    let banner = if u64::from(cols) < banner_width {
        HistoryEntry::line(config.banner_fallback.clone())
    } else {
        HistoryEntry::banner(config.banner.clone())
    };
    let initial = vec![HistoryEntry::line(config.greeting.clone()), banner];

    Terminal::new(
        initial,
        config.prompt.clone(),
        config.max_visible,
        CommandSet::from_config(config),
    )
}

/// Raw-mode session wrapper: the terminal is restored whatever the event
/// loop returns
fn run(term: &mut Terminal) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let result = session(term);
    let _ = io::stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
    result
}

fn session(term: &mut Terminal) -> Result<()> {
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    loop {
        let (cols, _) = size().unwrap_or((80, 24));
        let config = RenderConfig {
            width: cols,
            hint: Some(HINT.to_string()),
        };
        let frame = render_screen(term, &config);
        stdout.write_all(frame.as_bytes())?;
        stdout.flush()?;

        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match map_key(key) {
                KeyAction::Input(ev) => term.handle(ev),
                KeyAction::Trigger(kind) => term.trigger(kind),
                KeyAction::Quit => break,
                KeyAction::None => {}
            },
            // Repainted on the next pass with the new size
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    Ok(())
}

/// What a key press means for the session
enum KeyAction {
    Input(InputEvent),
    Trigger(CommandKind),
    Quit,
    None,
}

fn map_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Char(c) => KeyAction::Input(InputEvent::Char(c)),
        KeyCode::Enter => KeyAction::Input(InputEvent::Enter),
        KeyCode::Backspace => KeyAction::Input(InputEvent::Backspace),
        KeyCode::Delete => KeyAction::Input(InputEvent::Delete),
        KeyCode::Left => KeyAction::Input(InputEvent::Left),
        KeyCode::Right => KeyAction::Input(InputEvent::Right),
        KeyCode::Home => KeyAction::Input(InputEvent::Home),
        KeyCode::End => KeyAction::Input(InputEvent::End),
        KeyCode::F(1) => KeyAction::Trigger(CommandKind::Help),
        KeyCode::F(2) => KeyAction::Trigger(CommandKind::Contact),
        KeyCode::F(3) => KeyAction::Trigger(CommandKind::Resume),
        KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
