//! Supported network directory
//!
//! Static list of chains the hash calculator supports. Each entry links the
//! canonical network value used by the form to its numeric chain id and the
//! address prefix the Safe UI shows for it.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

const BUNDLED_DIRECTORY: &str = include_str!("../../data/networks.toml");

/// One supported chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    /// Canonical value stored in the form (e.g. "ethereum")
    pub value: String,
    /// Human readable label
    pub label: String,
    pub chain_id: u64,
    /// EIP-3770 shortname the Safe UI prefixes addresses with
    pub prefix: String,
    /// Display asset path, relative to the UI's public directory
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NetworkFile {
    #[serde(default)]
    network: Vec<Network>,
}

/// Read-only list of supported networks
#[derive(Debug, Clone, Default)]
pub struct NetworkDirectory {
    networks: Vec<Network>,
}

impl NetworkDirectory {
    /// Build a directory, rejecting duplicate values or chain ids
    pub fn new(networks: Vec<Network>) -> AppResult<Self> {
        let mut values = HashSet::new();
        let mut chain_ids = HashSet::new();
        for network in &networks {
            if !values.insert(network.value.as_str()) {
                return Err(AppError::TableLoad {
                    table: "networks".to_string(),
                    reason: format!("duplicate network value '{}'", network.value),
                });
            }
            if !chain_ids.insert(network.chain_id) {
                return Err(AppError::TableLoad {
                    table: "networks".to_string(),
                    reason: format!("duplicate chain id {}", network.chain_id),
                });
            }
        }

        Ok(Self { networks })
    }

    /// Parse a TOML document of `[[network]]` entries
    pub fn from_toml_str(toml_text: &str) -> AppResult<Self> {
        let file: NetworkFile = toml::from_str(toml_text).map_err(|e| AppError::TableLoad {
            table: "networks".to_string(),
            reason: e.to_string(),
        })?;
        Self::new(file.network)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let directory = Self::from_toml_str(&text)?;
        info!(
            "Loaded {} networks from {}",
            directory.len(),
            path.display()
        );
        Ok(directory)
    }

    /// The directory shipped with the crate
    pub fn bundled() -> AppResult<Self> {
        Self::from_toml_str(BUNDLED_DIRECTORY)
    }

    pub fn by_chain_id(&self, chain_id: u64) -> Option<&Network> {
        self.networks.iter().find(|n| n.chain_id == chain_id)
    }

    pub fn by_value(&self, value: &str) -> Option<&Network> {
        self.networks.iter().find(|n| n.value == value)
    }

    pub fn by_prefix(&self, prefix: &str) -> Option<&Network> {
        self.networks
            .iter()
            .find(|n| n.prefix.eq_ignore_ascii_case(prefix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.networks.iter()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
