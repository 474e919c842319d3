//! Safe Transaction Paste Parser
//!
//! Extracts multisig transaction fields from text copied out of the Safe web
//! UI, detects content the UI elided, and resolves the chain from EIP-3770
//! address prefixes.

pub mod chains;
pub mod cli;
pub mod config;
pub mod detection;
pub mod errors;
pub mod parser;
pub mod shared;
pub mod types;

pub use chains::ChainRegistry;
pub use parser::{apply_outcome, PasteOutcome, PasteParser};
pub use types::ParsedTransactionFields;
