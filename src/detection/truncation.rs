//! Truncation detection for copied transaction text
//!
//! The Safe UI elides long hex blobs behind a "show more" control. Copying the
//! page in that state yields a plausible but wrong `data` value, which would
//! produce a wrong transaction hash. Detection is a list of independent
//! signatures whose findings are unioned; any single match flags the field.
//!
//! Over-flagging is accepted: a user re-copying is cheap, a wrong hash is not.

use crate::parser::labels::{DATA_LABEL, OPERATION_LABEL};
use crate::types::FieldName;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::debug;

/// Characters of text inspected after `data:` when no `operation:` follows
const DATA_SECTION_FALLBACK_CHARS: usize = 200;

/// Shortest plausible call data: `0x` plus a 4-byte selector
const MIN_CALL_DATA_LEN: usize = 10;

lazy_static! {
    static ref LABELLED_HEX_ELLIPSIS: Regex = Regex::new(r"data:.*0x[a-fA-F0-9]+\.{3}").unwrap();
    static ref LONG_HEX_ELLIPSIS: Regex = Regex::new(r"0x[a-fA-F0-9]{30,}\.{3}").unwrap();
    static ref SHOW_MORE: Regex = Regex::new(r"(?i)show\s+more").unwrap();
    static ref UNTERMINATED_HEX: Regex = Regex::new(r"data:.*0x[a-fA-F0-9]{20,}\s*\n").unwrap();
    static ref FIRST_DATA_HEX: Regex = Regex::new(r"data:.*?(0x[a-fA-F0-9]+)").unwrap();
    static ref CLIPPED_INTO_OPERATION: Regex =
        Regex::new(r"(?i)data:[^\n]*?0x[a-fA-F0-9]+operation:").unwrap();
    static ref ELLIPSIS: Regex = Regex::new(r"\.{3,}").unwrap();
    static ref ELIDED_ZERO_ADDRESS: Regex = Regex::new(r"0x0+\.{3,}0+").unwrap();
    static ref HEX_DOTS: Regex = Regex::new(r"0x[a-fA-F0-9]{10,}\.{2,}").unwrap();
}

/// Everything a signature may inspect
#[derive(Debug, Clone, Copy)]
pub struct TruncationInput<'a> {
    /// Normalised paste text
    pub text: &'a str,
    /// `data:` value before cleaning
    pub raw_data: Option<&'a str>,
    /// `data:` value after cleaning
    pub data: Option<&'a str>,
}

impl<'a> TruncationInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            raw_data: None,
            data: None,
        }
    }

    pub fn with_data(mut self, raw_data: Option<&'a str>, data: Option<&'a str>) -> Self {
        self.raw_data = raw_data;
        self.data = data;
        self
    }
}

/// One independent truncation heuristic
#[derive(Debug, Clone, Copy)]
pub struct TruncationSignature {
    pub id: &'static str,
    pub description: &'static str,
    /// Field flagged when the signature matches
    pub field: FieldName,
    check: fn(&TruncationInput<'_>) -> bool,
}

impl TruncationSignature {
    pub fn matches(&self, input: &TruncationInput<'_>) -> bool {
        (self.check)(input)
    }
}

/// All signatures, most specific first
pub const SIGNATURES: [TruncationSignature; 8] = [
    TruncationSignature {
        id: "S1",
        description: "data label followed by hex ending in an ellipsis",
        field: FieldName::Data,
        check: labelled_hex_ellipsis,
    },
    TruncationSignature {
        id: "S2",
        description: "hex run of 30+ digits followed by an ellipsis",
        field: FieldName::Data,
        check: long_hex_ellipsis,
    },
    TruncationSignature {
        id: "S3",
        description: "\"show more\" inside the data section",
        field: FieldName::Data,
        check: show_more_in_data,
    },
    TruncationSignature {
        id: "S4",
        description: "data hex of odd length or shorter than a selector",
        field: FieldName::Data,
        check: malformed_data_hex,
    },
    TruncationSignature {
        id: "S5",
        description: "data hex running straight into the operation label",
        field: FieldName::Data,
        check: clipped_into_operation,
    },
    TruncationSignature {
        id: "S6",
        description: "ellipsis outside elided zero addresses near data or with \"show more\"",
        field: FieldName::Data,
        check: unexplained_ellipsis,
    },
    TruncationSignature {
        id: "S7",
        description: "hex run of 10+ digits followed by two or more dots",
        field: FieldName::Data,
        check: hex_followed_by_dots,
    },
    TruncationSignature {
        id: "R1",
        description: "extracted data value is elided or implausibly short",
        field: FieldName::Data,
        check: implausible_data_value,
    },
];

/// Fields flagged as truncated by any signature
pub fn detect_truncation(input: &TruncationInput<'_>) -> BTreeSet<FieldName> {
    matching_signatures(input)
        .into_iter()
        .map(|signature| signature.field)
        .collect()
}

/// Every signature that fires on `input`
pub fn matching_signatures(input: &TruncationInput<'_>) -> Vec<&'static TruncationSignature> {
    SIGNATURES
        .iter()
        .filter(|signature| {
            let matched = signature.matches(input);
            if matched {
                debug!(
                    "Truncation signature {} matched: {}",
                    signature.id, signature.description
                );
            }
            matched
        })
        .collect()
}

/// Text from `data:` to the following `operation:` label
///
/// Without an `operation:` label the section ends after `fallback_chars`
/// characters, or at end of text when no fallback is given.
fn data_section(text: &str, fallback_chars: Option<usize>) -> Option<&str> {
    let start = text.find(DATA_LABEL)?;
    let end = match text[start..].find(OPERATION_LABEL) {
        Some(offset) => start + offset,
        None => match fallback_chars {
            Some(limit) => text[start..]
                .char_indices()
                .nth(limit)
                .map(|(offset, _)| start + offset)
                .unwrap_or(text.len()),
            None => text.len(),
        },
    };
    Some(&text[start..end])
}

fn labelled_hex_ellipsis(input: &TruncationInput<'_>) -> bool {
    LABELLED_HEX_ELLIPSIS.is_match(input.text)
}

fn long_hex_ellipsis(input: &TruncationInput<'_>) -> bool {
    LONG_HEX_ELLIPSIS.is_match(input.text)
}

fn show_more_in_data(input: &TruncationInput<'_>) -> bool {
    data_section(input.text, None).is_some_and(|section| SHOW_MORE.is_match(section))
}

fn malformed_data_hex(input: &TruncationInput<'_>) -> bool {
    if !UNTERMINATED_HEX.is_match(input.text) {
        return false;
    }

    let Some(caps) = FIRST_DATA_HEX.captures(input.text) else {
        return false;
    };
    let hex = &caps[1];
    let digits = hex.len() - 2;

    digits % 2 == 1 || hex.len() < MIN_CALL_DATA_LEN
}

fn clipped_into_operation(input: &TruncationInput<'_>) -> bool {
    CLIPPED_INTO_OPERATION.is_match(input.text)
}

fn unexplained_ellipsis(input: &TruncationInput<'_>) -> bool {
    let ellipses = ELLIPSIS.find_iter(input.text).count();
    let elided_zero = ELIDED_ZERO_ADDRESS.find_iter(input.text).count();
    if ellipses <= elided_zero {
        return false;
    }

    SHOW_MORE.is_match(input.text)
        || data_section(input.text, Some(DATA_SECTION_FALLBACK_CHARS))
            .is_some_and(|section| section.contains("..."))
}

fn hex_followed_by_dots(input: &TruncationInput<'_>) -> bool {
    HEX_DOTS.is_match(input.text)
}

fn implausible_data_value(input: &TruncationInput<'_>) -> bool {
    let raw_elided = input
        .raw_data
        .is_some_and(|raw| raw.contains("...") || SHOW_MORE.is_match(raw));
    let too_short = input
        .data
        .is_some_and(|data| data.starts_with("0x") && data.len() < MIN_CALL_DATA_LEN);

    raw_elided || too_short
}
