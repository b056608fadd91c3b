use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "vishwakarma-tui")]
#[command(about = "Terminal UI for Vishwakarma business planning")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against the projects backend (default)
    Run,
    /// Run in dev mode with local in-memory data
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
