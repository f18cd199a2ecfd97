//! campaign_tui - Terminal game-master dashboard for a tabletop campaign

mod app;
mod ui;

use app::App;
use campaign_core::config::{default_campaign, load_campaign, ConfigError};
use campaign_core::TickKind;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the game-master secret
const SECRET_VAR: &str = "CAMPAIGN_MASTER_SECRET";

#[derive(Error, Debug)]
enum TuiError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() -> Result<(), TuiError> {
    let config = match std::env::args().nth(1) {
        Some(path) => load_campaign(Path::new(&path))?,
        None => default_campaign(),
    };

    setup_logging(&config.settings.log_dir)?;

    let secret = std::env::var(SECRET_VAR).ok();
    let mut app = App::new(&config, secret.as_deref())?;
    tracing::info!(read_only = app.read_only, players = app.players.len(), "dashboard started");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<(), TuiError> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char(c @ '1'..='6'), _) => app.set_tab(c as usize - '1' as usize),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::Char('t'), _) => app.advance(TickKind::Turn),
                    (KeyCode::Char('d'), _) => app.advance(TickKind::Day),
                    (KeyCode::Char('a'), _) => app.apply_selected_effect(),
                    (KeyCode::Char('x'), _) => app.remove_selected_effect(),
                    (KeyCode::Char('e'), _) => app.toggle_equip(),
                    (KeyCode::Char('u'), _) => app.use_selected_item(),
                    (KeyCode::Char('g'), _) => app.trigger_selected_ability(),
                    (KeyCode::Char('s'), _) => app.toggle_ability_link(),
                    (KeyCode::Char('?'), _) => app.toggle_help(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Log to a file; the terminal belongs to the dashboard
fn setup_logging(log_dir: &Path) -> Result<(), TuiError> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "campaign_tui.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the whole process
    std::mem::forget(guard);

    tracing::info!(dir = %log_dir.display(), "logging initialized");
    Ok(())
}
