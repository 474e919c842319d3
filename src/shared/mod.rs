//! Shared helpers used by the extractor, the truncation detector and the
//! network resolver.

pub mod address;
pub mod text;

pub use address::{canonicalize_address, is_elided_zero_address, ZERO_ADDRESS};
pub use text::{normalize_paste, trim_non_alphanumeric};
