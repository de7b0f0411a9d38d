use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;

use cmdk::app::{
    config::AppConfig, menu::CommandMenu, persistence, r#loop::run_loop, state::AppState,
};
use cmdk::components::palette_view::PaletteView;
use cmdk::infrastructure::{dispatcher::ActionTable, navigator::SiteNavigator};

#[derive(Parser, Debug)]
#[command(name = "cmdk", about = "Keyboard-driven command menu")]
struct Args {
    /// Config file (defaults to ~/.config/cmdk/config.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Location to start at, e.g. /pages/pricing.html
    #[arg(short, long, value_name = "PATH")]
    location: Option<String>,

    /// Directory for log files (also CMDK_LOG_DIR)
    #[arg(long, value_name = "DIR", env = "CMDK_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

// The terminal belongs to the UI, so logs only go to a file when asked for.
fn setup_tracing(log_dir: Option<&PathBuf>, verbose: bool) -> Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let Some(dir) = log_dir else {
        return Ok(());
    };
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let log_path = dir.join(format!("cmdk.{}.log", std::process::id()));
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cmdk=debug")
        } else {
            EnvFilter::new("cmdk=info")
        }
    });
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    tracing::info!(path = %log_path.display(), "tracing initialized");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(args.log_dir.as_ref(), args.verbose)?;
    setup_panic_hook();

    // Config and registry are validated before the terminal is touched, so a
    // bad config fails with a readable error instead of a garbled screen.
    let config = match args.config.clone().or_else(AppConfig::default_path) {
        Some(path) => AppConfig::load_from(&path)?,
        None => AppConfig::default(),
    };
    let registry = config.registry().context("invalid command registry")?;
    let location = args
        .location
        .or_else(|| config.start_location.clone())
        .unwrap_or_else(|| "/".to_string());
    tracing::info!(commands = registry.len(), %location, "starting");

    let (action_tx, action_rx) = mpsc::channel(100);
    let actions = ActionTable::with_defaults(action_tx.clone());
    for action_id in actions.unknown_ids(&registry) {
        tracing::warn!(%action_id, "configured command has no handler");
    }
    let menu = CommandMenu::new(
        registry,
        PaletteView::default(),
        SiteNavigator::new(location.clone(), action_tx),
        actions,
    );
    let app_state = AppState::new(&config.keys, location, persistence::get_preferences_path());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, menu, action_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %format!("{err:#}"), "event loop failed");
        println!("{err:?}");
    }

    Ok(())
}
