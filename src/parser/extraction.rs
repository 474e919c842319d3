//! Label-delimited field extraction
//!
//! A field's value is the text between its label and its terminator label,
//! reduced to the first line and stripped of surrounding punctuation. Each
//! field depends only on the positions of its own label and terminator, so a
//! missing field never disturbs its neighbours.

use super::labels::{FieldLabel, LABEL_CHAIN};
use crate::shared::address::{canonicalize_address, is_elided_zero_address, ZERO_ADDRESS};
use crate::shared::text::{find_ignore_ascii_case, trim_non_alphanumeric};
use crate::types::{FieldName, ParsedTransactionFields};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// Token-transfer decoding display, e.g. `value uint256 1000000`
    static ref VALUE_UINT256: Regex = Regex::new(r"(?i)value\s+uint256\s+([0-9]+)").unwrap();
}

/// One extracted value window, before and after cleaning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedValue {
    /// First line of the window, trimmed but otherwise untouched
    pub raw: String,
    /// Cleaned value; `None` when nothing alphanumeric remained
    pub value: Option<String>,
}

/// Extraction output for the whole label chain
#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    pub fields: ParsedTransactionFields,
    /// Uncleaned `data:` value, kept for truncation checks
    pub raw_data: Option<String>,
}

/// Extract the value following `label`, ending at `next_label`
///
/// Returns `None` when the label is absent or the cleaned value is empty.
pub fn extract_field(text: &str, label: &str, next_label: Option<&str>) -> Option<String> {
    extract_value(text, label, next_label, false).and_then(|extracted| extracted.value)
}

/// Locate `label` and return its raw and cleaned value window
pub fn extract_value(
    text: &str,
    label: &str,
    next_label: Option<&str>,
    ignore_case: bool,
) -> Option<ExtractedValue> {
    let label_index = if ignore_case {
        find_ignore_ascii_case(text, label, 0)?
    } else {
        text.find(label)?
    };

    let start = label_index + label.len();
    let end = next_label
        .and_then(|next| text[start..].find(next))
        .map(|offset| start + offset)
        .unwrap_or(text.len());

    Some(clean_window(&text[start..end]))
}

fn clean_window(window: &str) -> ExtractedValue {
    let raw = window.trim().split('\n').next().unwrap_or_default().trim();
    let cleaned = trim_non_alphanumeric(raw);

    let value = if is_elided_zero_address(cleaned) {
        Some(ZERO_ADDRESS.to_string())
    } else if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    };

    ExtractedValue {
        raw: raw.to_string(),
        value,
    }
}

/// Extract one label chain entry, honouring aliases and anchors
pub fn extract_label(text: &str, label: &FieldLabel) -> Option<ExtractedValue> {
    let mut fallback = None;

    for spelling in label.labels {
        if let Some(anchor) = label.anchor {
            if let Some(extracted) = extract_after_anchor(text, anchor, spelling, label) {
                if extracted.value.is_some() {
                    return Some(extracted);
                }
            }
        }

        if let Some(extracted) = extract_value(text, spelling, label.terminator, label.ignore_case)
        {
            if extracted.value.is_some() {
                return Some(extracted);
            }
            fallback.get_or_insert(extracted);
        }
    }

    fallback
}

/// Search for `spelling` only after the first occurrence of `anchor`
fn extract_after_anchor(
    text: &str,
    anchor: &str,
    spelling: &str,
    label: &FieldLabel,
) -> Option<ExtractedValue> {
    let anchor_index = text.find(anchor)?;
    let label_index = if label.ignore_case {
        find_ignore_ascii_case(text, spelling, anchor_index)?
    } else {
        text[anchor_index..].find(spelling)? + anchor_index
    };
    extract_value(
        &text[label_index..],
        spelling,
        label.terminator,
        label.ignore_case,
    )
}

/// Run the full label chain over `text`
pub fn extract_fields(text: &str) -> ExtractedFields {
    let mut extracted = ExtractedFields::default();

    for label in &LABEL_CHAIN {
        let Some(window) = extract_label(text, label) else {
            continue;
        };

        if label.field == FieldName::Data {
            extracted.raw_data = Some(window.raw.clone());
        }

        let value = match label.field {
            // Present but without digits: the UI default is a plain call
            FieldName::Operation => window
                .value
                .map(|op| leading_digits(&op).unwrap_or("0").to_string()),
            field if field.is_address() => window.value.as_deref().map(canonicalize_address),
            _ => window.value,
        };

        extracted.fields.set(label.field, value);
    }

    if extracted.fields.value.is_none() {
        extracted.fields.value = VALUE_UINT256
            .captures(text)
            .map(|caps| caps[1].to_string());
    }

    debug!(
        "Extracted {} of {} labelled fields",
        extracted.fields.present_fields().count(),
        LABEL_CHAIN.len()
    );

    extracted
}

/// First run of ASCII digits in `value`
fn leading_digits(value: &str) -> Option<&str> {
    let start = value.find(|c: char| c.is_ascii_digit())?;
    let len = value[start..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len() - start);
    Some(&value[start..start + len])
}
