//! TQEX - Terminal Quote Explorer
//!
//! A terminal application that fetches a list of quotes from a remote HTTP
//! endpoint and lets the user page through them, showing book, author, and
//! quote text. Quotes can be browsed in order or by random jumps.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

mod domain;
mod application;
mod infrastructure;
mod presentation;

use application::App;
use domain::BrowseMode;
use infrastructure::{spawn_fetch, LoadReply, QuoteSource, DEFAULT_QUOTES_URL};
use presentation::{render_ui, InputHandler};

/// How long the input poll waits before the next redraw. Fetch completions
/// are picked up with at most this much latency.
const TICK: Duration = Duration::from_millis(250);

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Quote service endpoint returning a JSON array of quote records.
    #[clap(long, default_value = DEFAULT_QUOTES_URL)]
    url: String,

    /// Browsing behavior: step through quotes in order (loading on demand),
    /// or jump between random quotes (loading at startup).
    #[clap(long, value_enum, default_value_t = ModeArg::Shuffle)]
    mode: ModeArg,

    /// Request timeout for the quote fetch, in seconds.
    #[clap(long, default_value_t = 30)]
    timeout: u64,
}

/// CLI spelling of the browse modes.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Sequential,
    Shuffle,
}

impl From<ModeArg> for BrowseMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sequential => BrowseMode::Sequential,
            ModeArg::Shuffle => BrowseMode::Shuffle,
        }
    }
}

/// Entry point for the TQEX terminal quote explorer.
///
/// Parses the command line, sets up the terminal interface, kicks off the
/// initial load when the browse mode asks for one, and runs the main event
/// loop until the user quits.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built, if terminal setup
/// fails, or if there are issues with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let args = Args::parse();

    let source = Arc::new(QuoteSource::new(
        &args.url,
        Duration::from_secs(args.timeout),
    )?);
    let (reply_tx, reply_rx) = unbounded::<LoadReply>();

    let mut app = App::new(args.mode.into());
    if matches!(app.navigator.mode(), BrowseMode::Shuffle) {
        app.request_load();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &source, &reply_tx, &reply_rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Each iteration settles finished loads, dispatches a queued load if one is
/// waiting, redraws, and then polls for keyboard input for one tick.
/// Continues running until the user presses 'q' in normal mode.
///
/// # Arguments
///
/// * `terminal` - Terminal interface for rendering
/// * `app` - Mutable reference to application state
/// * `source` - Shared quote source handed to each background fetch
/// * `replies_tx` - Sending side given to spawned fetches
/// * `replies_rx` - Receiving side the loop drains for completions
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    source: &Arc<QuoteSource>,
    replies_tx: &Sender<LoadReply>,
    replies_rx: &Receiver<LoadReply>,
) -> io::Result<()> {
    loop {
        while let Ok((generation, result)) = replies_rx.try_recv() {
            app.finish_load(generation, result);
        }
        if let Some(generation) = app.take_pending_load() {
            spawn_fetch(source.clone(), generation, replies_tx.clone());
        }

        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') if matches!(app.mode, application::AppMode::Normal) => {
                            return Ok(());
                        }
                        _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
                    }
                }
            }
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
