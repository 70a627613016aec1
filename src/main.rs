//! chainview - terminal UI for a demo blockchain server.
//!
//! Connects to the blockchain HTTP API, watches wallet balances, shows the
//! chain and the pending transaction pool, and can trigger mining and chain
//! resets.

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

mod balance;
mod client;
mod clipboard;
mod commands;
mod constants;
mod domain;
mod format;
mod progress;
mod state;
mod theme;
mod tui;
mod ui;

use crate::state::{App, AppConfig, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// chainview - terminal UI for a demo blockchain server
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Server base URL (overrides the configured value)
    #[arg(short, long, value_name = "URL")]
    server: Option<String>,

    /// Add an address to the watch list on startup
    #[arg(short, long, value_name = "ADDRESS")]
    watch: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    color_eyre::install()?;

    let config = AppConfig::load();
    let startup = StartupOptions {
        server_url: cli.server,
        watch: cli.watch,
    };

    let mut terminal = tui::init()?;
    let mut app = App::new(config, startup)?;
    let result = app.run(&mut terminal).await;

    tui::restore()?;
    result
}

/// Send tracing output to a log file; the terminal belongs to the TUI.
///
/// Controlled through `RUST_LOG`; silent when the log directory is not
/// writable.
fn init_tracing() {
    let Some(mut path) = dirs::cache_dir() else {
        return;
    };
    path.push("chainview");
    if std::fs::create_dir_all(&path).is_err() {
        return;
    }
    path.push("chainview.log");

    let Ok(log_file) = std::fs::File::create(&path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}
