//! Kanban: terminal task board.
//!
//! Opens a four-column board seeded with demo tasks. Configuration via CLI
//! flags, environment variables, or config file
//! (`~/.config/kanban/config.toml`).
//!
//! ```bash
//! # Demo board
//! cargo run --bin kanban
//!
//! # Empty board, tasks due in two weeks
//! cargo run --bin kanban -- --no-seed --due-in-days 14
//!
//! # Print the board as JSON
//! cargo run --bin kanban -- --dump
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use kanban::app::App;
use kanban::board::TaskStore;
use kanban::config::{BoardConfig, CliArgs};
use kanban::ui;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > env > config file > defaults).
    let config = match BoardConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            BoardConfig::from_cli(&cli)
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    let store = config.build_store();
    tracing::info!(tasks = store.len(), seeded = config.seed_demo, "kanban starting");

    if cli.dump {
        let json = serde_json::to_string_pretty(&store.project()).map_err(io::Error::other)?;
        println!("{json}");
        return Ok(());
    }

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, store, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("kanban exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("kanban.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop: draw, then handle at most one key event.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: TaskStore,
    config: &BoardConfig,
) -> io::Result<()> {
    let mut app = App::new(store)
        .with_max_title_len(config.max_title_len)
        .with_progress_step(config.progress_step);

    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
