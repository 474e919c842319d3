//! Network resolution from EIP-3770 prefixed addresses
//!
//! The Safe UI prints addresses as `shortname:0x...`. The first such token in
//! the paste identifies the chain. Resolution is best effort and independent
//! of truncation: network identity never feeds the hash directly.

use crate::chains::{parse_eip155_reference, ChainRegistry};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;

lazy_static! {
    static ref PREFIXED_ADDRESS_TOKEN: Regex =
        Regex::new(r"([a-zA-Z0-9]+):0x[a-fA-F0-9]{40}").unwrap();
}

/// Network details recovered from a paste; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkResolution {
    pub chain_id: Option<u64>,
    /// Canonical network value, when the chain is in the directory
    pub network: Option<String>,
    pub detected_short_name: Option<String>,
    pub all_network_short_names: Option<BTreeSet<String>>,
}

/// First shortname used as an address prefix in `text`
pub fn find_prefixed_shortname(text: &str) -> Option<&str> {
    PREFIXED_ADDRESS_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolve the chain a paste belongs to
pub fn resolve_network(text: &str, registry: &ChainRegistry) -> NetworkResolution {
    let Some(shortname) = find_prefixed_shortname(text) else {
        debug!("No EIP-3770 prefixed address found");
        return NetworkResolution::default();
    };

    let mut resolution = NetworkResolution {
        detected_short_name: Some(shortname.to_string()),
        ..Default::default()
    };

    let Some(chain_id) = registry
        .shortnames
        .lookup(shortname)
        .and_then(parse_eip155_reference)
    else {
        debug!("Shortname '{}' does not map to a known chain id", shortname);
        return resolution;
    };

    resolution.chain_id = Some(chain_id);
    resolution.all_network_short_names = Some(
        registry
            .shortnames
            .shortnames_for_chain(chain_id)
            .into_iter()
            .collect(),
    );
    resolution.network = registry
        .networks
        .by_chain_id(chain_id)
        .map(|network| network.value.clone());

    debug!(
        "Resolved shortname '{}' to chain {} ({:?})",
        shortname, chain_id, resolution.network
    );

    resolution
}
