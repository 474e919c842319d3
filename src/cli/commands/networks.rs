use super::load_registry;
use crate::config::OutputFormat;
use crate::errors::AppResult;
use clap::Args;
use std::path::PathBuf;

/// List the supported network directory
#[derive(Args)]
pub struct NetworksCommand {
    /// Output format (overrides config.toml)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl NetworksCommand {
    pub fn run(&self) -> AppResult<()> {
        let (config, registry) = load_registry(self.config.as_deref())?;

        match self.format.unwrap_or(config.output.format) {
            OutputFormat::Json => {
                let networks: Vec<_> = registry.networks.iter().collect();
                println!("{}", serde_json::to_string_pretty(&networks)?);
            }
            OutputFormat::Text => {
                println!(
                    "{:<16} {:<16} {:>12}  {:<10} {}",
                    "VALUE", "LABEL", "CHAIN ID", "PREFIX", "LOGO"
                );
                for network in registry.networks.iter() {
                    println!(
                        "{:<16} {:<16} {:>12}  {:<10} {}",
                        network.value,
                        network.label,
                        network.chain_id,
                        network.prefix,
                        network.logo.as_deref().unwrap_or("-")
                    );
                }
            }
        }

        Ok(())
    }
}
