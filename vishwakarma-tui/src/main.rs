mod api;
mod app;
mod cli;
mod config;
mod content;
mod logging;
mod runtime;
mod types;
mod ui;

use anyhow::{Context, Result};
use api::ApiClient;
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::AppConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => {
            let path = AppConfig::config_path()?;
            if AppConfig::ensure_file(&path)? {
                println!("Created default config at {}", path.display());
            }
            println!("{}", path.display());
            Ok(())
        }
        Commands::Dev => {
            let config = AppConfig::load()?;
            run(config, ApiClient::dev()?, true).await
        }
        Commands::Run => {
            let config = AppConfig::load()?;
            let client = ApiClient::new(&config.api_url)?;
            run(config, client, false).await
        }
    }
}

async fn run(config: AppConfig, client: ApiClient, dev_mode: bool) -> Result<()> {
    let log_path = logging::init(&config)?;
    tracing::info!(
        api_url = %config.api_url,
        dev = client.is_dev(),
        log = %log_path.display(),
        "starting vishwakarma-tui"
    );

    let mut app = App::new(&config, dev_mode);

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("exited with error: {:?}", err);
    }
    res
}
