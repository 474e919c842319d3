//! Address canonicalisation helpers

use lazy_static::lazy_static;
use regex::Regex;

/// Full 20-byte zero address
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

lazy_static! {
    /// Display shorthand for the zero address, e.g. `0x0000...0000`
    static ref ELIDED_ZERO_ADDRESS: Regex = Regex::new(r"^0x0+\.{3,}0+$").unwrap();
    /// Elided zero address leading a longer value, e.g. `0x0000...0000 (ETH`
    static ref LEADING_ELIDED_ZERO_ADDRESS: Regex =
        Regex::new(r"^0x0+\.{3,}0+(?:[^0-9a-fA-F]|$)").unwrap();
    /// EIP-3770 `shortname:` prefix
    static ref SHORTNAME_PREFIX: Regex = Regex::new(r"^[a-zA-Z0-9]+:").unwrap();
    static ref FULL_ADDRESS: Regex = Regex::new(r"^0x[a-fA-F0-9]{40}$").unwrap();
    static ref BARE_ADDRESS: Regex = Regex::new(r"^[a-fA-F0-9]{40}$").unwrap();
}

/// Check for the elided zero-address display form
pub fn is_elided_zero_address(value: &str) -> bool {
    ELIDED_ZERO_ADDRESS.is_match(value)
}

/// Rewrite an extracted address-field value into its canonical form
///
/// - `eth:0xabc...` loses its EIP-3770 prefix
/// - `0x0000...0000`, with or without trailing display text, becomes the full
///   zero address
/// - a bare 40-digit hex value gains its `0x` prefix
///
/// Anything else is returned unchanged.
pub fn canonicalize_address(value: &str) -> String {
    let unprefixed = match SHORTNAME_PREFIX.find(value) {
        Some(prefix) => &value[prefix.end()..],
        None => value,
    };

    if LEADING_ELIDED_ZERO_ADDRESS.is_match(unprefixed) {
        return ZERO_ADDRESS.to_string();
    }
    if FULL_ADDRESS.is_match(unprefixed) {
        return unprefixed.to_string();
    }
    if BARE_ADDRESS.is_match(value) {
        return format!("0x{}", value);
    }
    value.to_string()
}
