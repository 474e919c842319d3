//! Safe Transaction Paste Parser - Type System
//!
//! - `fields`: parsed transaction record, field names and essential fields

mod fields;

pub use fields::*;
