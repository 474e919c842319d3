use super::load_registry;
use crate::errors::{AppError, AppResult};
use clap::Args;
use std::path::PathBuf;

/// Resolve a chain shortname, or list the shortnames of a chain id
#[derive(Args)]
pub struct ShortnamesCommand {
    /// Shortname (e.g. "gno") or numeric chain id (e.g. 100)
    pub query: String,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ShortnamesCommand {
    pub fn run(&self) -> AppResult<()> {
        let (_, registry) = load_registry(self.config.as_deref())?;

        let chain_id = match self.query.parse::<u64>() {
            Ok(chain_id) => chain_id,
            Err(_) => registry.shortnames.chain_id_for(&self.query).ok_or_else(|| {
                AppError::InvalidData(format!("Unknown chain shortname: {}", self.query))
            })?,
        };

        let shortnames = registry.shortnames.shortnames_for_chain(chain_id);
        if shortnames.is_empty() {
            return Err(AppError::InvalidData(format!(
                "No shortnames registered for chain id {}",
                chain_id
            )));
        }

        println!("Chain ID:   {}", chain_id);
        match registry.networks.by_chain_id(chain_id) {
            Some(network) => println!("Network:    {} ({})", network.label, network.value),
            None => println!("Network:    not supported"),
        }
        println!("Shortnames: {}", shortnames.join(", "));

        Ok(())
    }
}
