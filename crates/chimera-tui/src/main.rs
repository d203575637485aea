//! chimera-update TUI
//!
//! Terminal front-end for checking and installing system package updates

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chimera_core::{Config, UpdateController, build_controller};
use clap::Parser;
use color_eyre::Result;
use crossterm::{
    event::{self as term_event, Event as CrosstermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod action;
mod app;
mod event;
mod notify;
mod style;
mod ui;

use action::Action;
use app::App;
use event::EventHandler;
use notify::Notifier;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Chimera Update terminal UI
#[derive(Parser, Debug)]
#[command(name = "chimera-update", version, about)]
struct Args {
    /// Configuration file (defaults to the standard lookup)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tick rate in milliseconds
    #[arg(long, default_value = "250")]
    tick_rate: u64,

    /// Enable debug logging to file
    #[arg(long)]
    debug: bool,

    /// Do not send desktop notifications
    #[arg(long)]
    no_notify: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();
    let config = Config::load_from(args.config.as_deref())?;

    // stdout belongs to the terminal UI, so logs only go to a file
    if args.debug {
        let file = std::fs::File::create("chimera-update.log")?;
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    }

    let controller = build_controller(&config);

    let mut terminal = init_terminal()?;

    let result = match controller {
        Ok(controller) => {
            let notifier = Notifier::new(config.notifications && !args.no_notify);
            let tick_rate = Duration::from_millis(args.tick_rate);
            run_app(&mut terminal, Arc::new(controller), notifier, tick_rate)
                .await
                .map(|()| ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::error!(error = %err, "no usable package manager");
            show_startup_error(&mut terminal, &err.to_string()).map(|()| ExitCode::FAILURE)
        }
    };

    restore_terminal(&mut terminal)?;

    result
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Show the error dialog until the user acknowledges it
fn show_startup_error(terminal: &mut Tui, message: &str) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::dialog::render_error(frame, message))?;

        if let CrosstermEvent::Key(key) = term_event::read()?
            && key.kind == KeyEventKind::Press
            && matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q' | ' ')
            )
        {
            return Ok(());
        }
    }
}

/// Run the application main loop
async fn run_app(
    terminal: &mut Tui,
    controller: Arc<UpdateController>,
    notifier: Notifier,
    tick_rate: Duration,
) -> Result<()> {
    let mut events = EventHandler::new(tick_rate);
    events.start();

    // Worker tasks report back through this channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let mut app = App::new(controller, notifier, action_tx);

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        tokio::select! {
            event = events.next() => {
                let Some(event) = event else { break };
                let action = match event {
                    event::Event::Key(key) => event::key_to_action(key, app.show_help),
                    event::Event::Resize => Action::Render,
                    event::Event::Tick => Action::Tick,
                };
                app.handle_action(action);
            }
            Some(action) = action_rx.recv() => {
                app.handle_action(action);
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
