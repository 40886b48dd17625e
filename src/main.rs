use std::path::PathBuf;
use std::sync::mpsc;

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use subsel::app::{App, TICK_RATE};
use subsel::backend::{Backend, BackendCredentials};
use subsel::config;
use subsel::search::{BuiltinIndex, SearchProvider, spawn_worker};

/// Interactive subject multi-select with live search suggestions
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ignore any hosted index configuration and use the builtin catalog
    #[arg(long)]
    offline: bool,

    /// Override the field placeholder text
    #[arg(long)]
    placeholder: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if cli.offline {
        config.search.hosted = false;
    }
    if let Some(placeholder) = cli.placeholder {
        config.ui.placeholder = placeholder;
    }

    // One-time backend client bootstrap; credentials may be absent
    Backend::init(BackendCredentials::from_env());

    let provider = match SearchProvider::from_config(&config.search) {
        Ok(provider) => provider,
        Err(e) => {
            log::debug!("hosted search unavailable, using builtin catalog: {e}");
            SearchProvider::Builtin(BuiltinIndex::default())
        }
    };

    let (request_tx, request_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    spawn_worker(provider, request_rx, reply_tx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, App::new(&config, request_tx, reply_rx));

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events, timers, and worker replies
        app.handle_events(TICK_RATE)?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
