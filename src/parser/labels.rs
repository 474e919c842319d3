//! Label vocabulary of the Safe UI copy output
//!
//! Each field is delimited by its own label and a terminator label. The chain
//! below is the single source of truth for both; the extractor walks it
//! uniformly and never special-cases a field by name.

use crate::types::FieldName;

/// Where one field's value starts and ends in pasted text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLabel {
    pub field: FieldName,
    /// Label spellings tried in order; the first one present wins
    pub labels: &'static [&'static str],
    /// Label that ends the value window; end of text when absent or not found
    pub terminator: Option<&'static str>,
    /// Match `labels` ignoring ASCII case
    pub ignore_case: bool,
    /// Section heading to prefer: when present, the label is searched after it first
    pub anchor: Option<&'static str>,
}

impl FieldLabel {
    const fn exact(
        field: FieldName,
        label: &'static [&'static str],
        terminator: &'static str,
    ) -> Self {
        Self {
            field,
            labels: label,
            terminator: Some(terminator),
            ignore_case: false,
            anchor: None,
        }
    }
}

pub const SAFE_ADDRESS_LABELS: &[&str] = &["safe address:", "transaction from:", "safe:", "from:"];

/// Heading of the decoded-call section that repeats `to:`
pub const TRANSACTION_DATA_ANCHOR: &str = "Transaction data";

pub const DATA_LABEL: &str = "data:";
pub const OPERATION_LABEL: &str = "operation:";

/// The fixed label chain, in source UI order
pub const LABEL_CHAIN: [FieldLabel; 14] = [
    FieldLabel {
        field: FieldName::SafeAddress,
        labels: SAFE_ADDRESS_LABELS,
        terminator: Some("to:"),
        ignore_case: true,
        anchor: None,
    },
    FieldLabel {
        field: FieldName::To,
        labels: &["to:"],
        terminator: Some("value:"),
        ignore_case: false,
        anchor: Some(TRANSACTION_DATA_ANCHOR),
    },
    FieldLabel::exact(FieldName::Value, &["value:"], DATA_LABEL),
    FieldLabel::exact(FieldName::Data, &[DATA_LABEL], OPERATION_LABEL),
    FieldLabel::exact(FieldName::Operation, &[OPERATION_LABEL], "safeTxGas:"),
    FieldLabel::exact(FieldName::SafeTxGas, &["safeTxGas:"], "baseGas:"),
    FieldLabel::exact(FieldName::BaseGas, &["baseGas:"], "gasPrice:"),
    FieldLabel::exact(FieldName::GasPrice, &["gasPrice:"], "gasToken:"),
    FieldLabel::exact(FieldName::GasToken, &["gasToken:"], "refundReceiver:"),
    FieldLabel::exact(FieldName::RefundReceiver, &["refundReceiver:"], "nonce:"),
    FieldLabel::exact(FieldName::Nonce, &["nonce:"], "Transaction hashes"),
    FieldLabel::exact(FieldName::SafeTxHash, &["safeTxHash:"], "Domain hash:"),
    FieldLabel::exact(FieldName::DomainHash, &["Domain hash:"], "Message hash:"),
    FieldLabel::exact(FieldName::MessageHash, &["Message hash:"], "Balance change"),
];

/// Label chain entry for a field
///
/// `FieldName` variants are declared in chain order, so the discriminant is the index.
pub fn label_for(field: FieldName) -> &'static FieldLabel {
    &LABEL_CHAIN[field as usize]
}
