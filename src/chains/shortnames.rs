//! EIP-3770 chain shortname table
//!
//! Maps chain shortnames (`eth`, `gno`, `arb1`, ...) to their CAIP-2 style
//! reference string `eip155:<chainId>`. The table format matches the
//! chainid.network `shortNameMapping.json` resource, so a fresh copy of that
//! file can be dropped in via configuration.

use crate::errors::{AppError, AppResult};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::info;

const EIP155_PREFIX: &str = "eip155:";

const BUNDLED_TABLE: &str = include_str!("../../data/chain_shortnames.json");

/// Read-only shortname -> `eip155:<chainId>` mapping plus its reverse index
#[derive(Debug, Clone, Default)]
pub struct ChainShortNameTable {
    entries: BTreeMap<String, String>,
    by_reference: HashMap<String, Vec<String>>,
}

impl ChainShortNameTable {
    /// Build a table from `(shortname, reference)` pairs
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries: BTreeMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        // BTreeMap iteration keeps each reverse-index bucket sorted
        let mut by_reference: HashMap<String, Vec<String>> = HashMap::new();
        for (shortname, reference) in &entries {
            by_reference
                .entry(reference.clone())
                .or_default()
                .push(shortname.clone());
        }

        Self {
            entries,
            by_reference,
        }
    }

    /// Parse a JSON object of `shortname -> "eip155:<chainId>"`
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let raw: BTreeMap<String, String> =
            serde_json::from_str(json).map_err(|e| AppError::TableLoad {
                table: "chain shortnames".to_string(),
                reason: e.to_string(),
            })?;

        if let Some(empty) = raw.iter().find(|(k, _)| k.trim().is_empty()) {
            return Err(AppError::TableLoad {
                table: "chain shortnames".to_string(),
                reason: format!("empty shortname mapped to {}", empty.1),
            });
        }

        Ok(Self::from_entries(raw))
    }

    /// Load the table from a JSON file on disk
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        info!(
            "Loaded {} chain shortnames from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// The table shipped with the crate
    pub fn bundled() -> AppResult<Self> {
        Self::from_json_str(BUNDLED_TABLE)
    }

    /// Look up the `eip155:<chainId>` reference for a shortname
    ///
    /// Tries the lowercased shortname first, then the exact spelling.
    pub fn lookup(&self, shortname: &str) -> Option<&str> {
        self.entries
            .get(&shortname.to_lowercase())
            .or_else(|| self.entries.get(shortname))
            .map(String::as_str)
    }

    /// Resolve a shortname straight to its numeric chain id
    pub fn chain_id_for(&self, shortname: &str) -> Option<u64> {
        self.lookup(shortname).and_then(parse_eip155_reference)
    }

    /// All shortnames that map to the given chain id, sorted
    pub fn shortnames_for_chain(&self, chain_id: u64) -> Vec<String> {
        self.by_reference
            .get(&format!("{}{}", EIP155_PREFIX, chain_id))
            .cloned()
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extract the chain id from an `eip155:<chainId>` reference
///
/// Returns `None` for other namespaces or a non-numeric suffix.
pub fn parse_eip155_reference(reference: &str) -> Option<u64> {
    reference
        .strip_prefix(EIP155_PREFIX)
        .and_then(|id| id.parse::<u64>().ok())
}
