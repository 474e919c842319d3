//! Common Test Utilities
//!
//! Shared fixtures and helpers for the unit and integration suites.

#![allow(dead_code)]

pub mod recording_form;

use safe_paste_parser::ChainRegistry;

/// Registry built from the bundled tables
pub fn bundled_registry() -> ChainRegistry {
    ChainRegistry::bundled().expect("bundled tables should load")
}
