//! Static chain lookup tables
//!
//! - `shortnames`: EIP-3770 shortname -> `eip155:<chainId>` table
//! - `networks`: supported network directory
//!
//! Both are loaded once at startup and passed by reference into the parser.

pub mod networks;
pub mod shortnames;

pub use networks::{Network, NetworkDirectory};
pub use shortnames::{parse_eip155_reference, ChainShortNameTable};

use crate::config::TablesConfig;
use crate::errors::AppResult;

/// Both lookup tables, immutable after construction
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
    pub shortnames: ChainShortNameTable,
    pub networks: NetworkDirectory,
}

impl ChainRegistry {
    pub fn new(shortnames: ChainShortNameTable, networks: NetworkDirectory) -> Self {
        Self {
            shortnames,
            networks,
        }
    }

    /// Registry built from the tables bundled with the crate
    pub fn bundled() -> AppResult<Self> {
        Ok(Self::new(
            ChainShortNameTable::bundled()?,
            NetworkDirectory::bundled()?,
        ))
    }

    /// Load each table from its configured path, falling back to the bundled copy
    pub fn from_config(tables: &TablesConfig) -> AppResult<Self> {
        let shortnames = match &tables.chain_shortnames {
            Some(path) => ChainShortNameTable::load(path)?,
            None => ChainShortNameTable::bundled()?,
        };
        let networks = match &tables.networks {
            Some(path) => NetworkDirectory::load(path)?,
            None => NetworkDirectory::bundled()?,
        };
        Ok(Self::new(shortnames, networks))
    }
}
