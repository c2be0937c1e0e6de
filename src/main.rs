//! carewheel - Care request dashboard
//!
//! A touch-first TUI kiosk for residents with limited mobility.
//! A wheel of twelve care options rotates with single clicks or
//! swipes; a double click calls for the focused option with a
//! buzzer, or opens the games site for the games option.
//!
//! Usage: carewheel [--muted] [--windowed] [--dry-run]

mod app;
mod carousel;
mod config;
mod navbar;
mod platform;
mod types;
mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("carewheel {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let dry_run = args.iter().any(|a| a == "--dry-run" || a == "-n");
    let muted = args.iter().any(|a| a == "--muted" || a == "-m");
    let windowed = args.iter().any(|a| a == "--windowed" || a == "-w");

    // The TUI owns stdout, so logs go to a file instead
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    // Run the application
    let result = run_app(dry_run, muted, windowed);

    // Always try to restore terminal state, even on error
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"carewheel - Care request dashboard

USAGE:
    carewheel [OPTIONS]

OPTIONS:
    -n, --dry-run     Preview browser launches without executing them
    -m, --muted       Start with the buzzer muted
    -w, --windowed    Skip the fullscreen gate (for development)
    -h, --help        Print help information
    -v, --version     Print version information

GESTURES:
    Single click      Rotate the wheel one step
    Double click      Call for the focused option
    Swipe             Rotate the wheel (either direction)

KEYBINDINGS:
    Esc               Leave fullscreen
    t                 Cycle theme
    m                 Toggle sound
    q, Ctrl+C         Quit

CONFIG:
    ~/.config/carewheel/config.toml

LOG:
    ~/.local/share/carewheel/carewheel.log
"#
    );
}

/// Route log output to a file under the data directory
fn init_logging() -> Result<()> {
    let log_dir = dirs::data_dir()
        .context("Could not determine data directory")?
        .join("carewheel");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join("carewheel.log");
    let file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

fn run_app(dry_run: bool, muted: bool, windowed: bool) -> Result<()> {
    // Load configuration
    let config = config::Config::load().context("Failed to load configuration")?;

    log::info!("carewheel {} starting", env!("CARGO_PKG_VERSION"));

    // Create application state
    let mut app = App::new(config, dry_run, muted, windowed);

    if dry_run {
        eprintln!("Running in dry-run mode (no browser will be launched)");
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let now = Instant::now();

        // Resolve due timers before drawing
        app.tick(now);

        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app, now);
        })?;

        // Poll with a short timeout so tweens and the clock stay live
        if event::poll(Duration::from_millis(50))? {
            // Drain the whole burst; a swipe delivers many drag events
            while event::poll(Duration::from_millis(0))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key)?;
                    }
                    Event::Mouse(mouse) => {
                        app.handle_mouse(mouse)?;
                    }
                    _ => {}
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }
}
