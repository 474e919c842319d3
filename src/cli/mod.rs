use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// Safe Transaction Paste Parser
#[derive(Parser)]
#[command(name = "safe-paste")]
#[command(about = "Extract Safe multisig transaction fields from text copied out of the Safe UI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Parse copied transaction details into hash calculator fields
    Parse(commands::parse::ParseCommand),
    /// List supported networks
    Networks(commands::networks::NetworksCommand),
    /// Resolve a chain shortname or list the shortnames of a chain id
    Shortnames(commands::shortnames::ShortnamesCommand),
}

pub fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(command) => command.run(),
        Commands::Networks(command) => command.run(),
        Commands::Shortnames(command) => command.run(),
    }
}
