mod app;
mod config;
mod domain;
mod input;
mod rain;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, ValueEnum};
use config::{default_log_file, AppConfig, DEFAULT_GLYPHS};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::time::Instant;
use ticker::DEFAULT_TICK_MS;
use ui::handles::RowHandles;

#[derive(Parser)]
#[command(name = "matrix-todo")]
#[command(about = "A keyboard-and-mouse driven terminal to-do list", long_about = None)]
struct Cli {
    /// Event poll and animation interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,
    /// Number of falling glyphs in the background
    #[arg(long, default_value_t = DEFAULT_GLYPHS)]
    glyphs: usize,
    /// Disable the falling-glyph background
    #[arg(long)]
    no_rain: bool,
    /// Log file path. Defaults to <cache dir>/matrix-todo/matrix-todo.log
    #[arg(long)]
    log_file: Option<std::path::PathBuf>,
    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::new(cli.tick_ms, cli.glyphs, !cli.no_rain)?;

    let log_path = cli.log_file.unwrap_or_else(default_log_file);
    if let Err(e) = init_logging(&log_path, cli.log_level.into()) {
        // The widget works without a log; say so before the screen is taken over
        eprintln!("Warning: logging disabled ({:#})", e);
    }

    log::info!(
        "starting: tick {:?}, {} background glyphs",
        config.tick,
        config.glyphs
    );

    run_tui(config)
}

/// File logger - the terminal itself belongs to the UI
fn init_logging(path: &Path, level: LevelFilter) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory {}", dir.display()))?;
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    WriteLogger::init(level, log_config, file).context("installing logger")?;
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    // The widget context lives exactly as long as the terminal session
    let mut app = AppState::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    if let Err(e) = restore_terminal(&mut terminal) {
        log::warn!("failed to restore terminal: {}", e);
        eprintln!("Error restoring terminal: {}", e);
    }

    log::info!(
        "exiting with {} tasks ({} done)",
        app.tasks.len(),
        app.tasks.completed_count()
    );

    // anyhow prints the error itself once main returns
    if let Err(err) = &result {
        log::error!("{:#}", err);
    }

    result
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = app.config.tick;
    let mut last_tick = Instant::now();

    loop {
        // Render, then run post-render effects against the fresh frame
        let mut handles = RowHandles::new();
        terminal.draw(|f| handles = ui::render(f, app))?;
        app.after_render(handles);

        // Handle events with timeout for ticking
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if input::handle_key(app, key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        // Tick animation
        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
