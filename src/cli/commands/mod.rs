pub mod networks;
pub mod parse;
pub mod shortnames;

use crate::chains::ChainRegistry;
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use tracing::info;

/// Load configuration and the lookup tables it points at
///
/// Table loading failures are fatal: no command runs on a partial registry.
pub(crate) fn load_registry(config_path: Option<&Path>) -> AppResult<(AppConfig, ChainRegistry)> {
    let config = match config_path {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| AppError::Config(format!("Failed to load {}: {}", path.display(), e)))?,
        None => AppConfig::get_defaults(),
    };

    let registry = ChainRegistry::from_config(&config.tables)?;
    info!(
        "Chain registry ready: {} shortnames, {} networks",
        registry.shortnames.len(),
        registry.networks.len()
    );

    Ok((config, registry))
}
