//! Shared detection logic
//!
//! Heuristics that judge whether pasted content can be trusted. They operate
//! purely on text and never depend on which fields were extracted successfully.

pub mod truncation;

// Re-export for convenience
pub use truncation::{
    detect_truncation, matching_signatures, TruncationInput, TruncationSignature, SIGNATURES,
};
