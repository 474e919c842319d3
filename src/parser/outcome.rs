//! User-facing outcome of a paste attempt
//!
//! Exactly one outcome is produced per attempt. Failures and warnings carry
//! the minimal instruction the user needs to fix the paste.

use crate::types::{EssentialField, FieldName, ParsedTransactionFields};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Success,
}

/// Outcome of parsing one paste
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PasteOutcome {
    /// Blank or whitespace-only input; nothing was parsed
    EmptyInput,
    /// Parsing ran but found no transaction field at all
    NoRecognizedFields,
    /// Content was elided in the source UI; fields are diagnostic only
    TruncatedContent { fields: ParsedTransactionFields },
    /// Usable, but some essential fields need manual entry
    PartialFields {
        fields: ParsedTransactionFields,
        missing: Vec<EssentialField>,
    },
    /// Every essential field was found
    Complete { fields: ParsedTransactionFields },
}

impl PasteOutcome {
    pub fn severity(&self) -> Severity {
        match self {
            Self::EmptyInput | Self::NoRecognizedFields => Severity::Error,
            Self::TruncatedContent { .. } => Severity::Warning,
            Self::PartialFields { .. } | Self::Complete { .. } => Severity::Success,
        }
    }

    /// Whether the transaction values may be written to a destination form
    pub fn is_applicable(&self) -> bool {
        matches!(self, Self::PartialFields { .. } | Self::Complete { .. })
    }

    /// Parsed record, if parsing ran
    pub fn fields(&self) -> Option<&ParsedTransactionFields> {
        match self {
            Self::EmptyInput | Self::NoRecognizedFields => None,
            Self::TruncatedContent { fields }
            | Self::PartialFields { fields, .. }
            | Self::Complete { fields } => Some(fields),
        }
    }

    /// Essential fields the user must complete by hand
    pub fn missing_fields(&self) -> &[EssentialField] {
        match self {
            Self::PartialFields { missing, .. } => missing,
            _ => &[],
        }
    }

    /// Fields flagged as truncated
    pub fn truncated_fields(&self) -> Vec<FieldName> {
        match self {
            Self::TruncatedContent { fields } => fields.truncated_fields.iter().copied().collect(),
            _ => Vec::new(),
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Self::EmptyInput => "No input",
            Self::NoRecognizedFields => "No transaction details found",
            Self::TruncatedContent { .. } => "Truncated content detected",
            Self::PartialFields { .. } => "Transaction details partially parsed",
            Self::Complete { .. } => "Transaction details parsed",
        }
    }

    /// Actionable instruction for the user
    pub fn guidance(&self) -> String {
        match self {
            Self::EmptyInput => "Please paste transaction details first.".to_string(),
            Self::NoRecognizedFields => "Could not find any transaction details in the pasted text. \
                 Please make sure you're pasting the right content."
                .to_string(),
            Self::TruncatedContent { fields } => {
                let names: Vec<&str> = fields.truncated_fields.iter().map(FieldName::as_str).collect();
                format!(
                    "Some fields appear to be truncated: {}. Please expand these fields in Safe UI \
                     by clicking \"show more\" before copying, then paste the complete content again.",
                    names.join(", ")
                )
            }
            Self::PartialFields { missing, .. } => {
                let labels: Vec<&str> = missing.iter().map(EssentialField::label).collect();
                format!(
                    "Form partially filled. Please complete these fields manually: {}.",
                    labels.join(", ")
                )
            }
            Self::Complete { .. } => {
                "The form has been filled with the parsed transaction details.".to_string()
            }
        }
    }
}

impl fmt::Display for PasteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.headline(), self.guidance())
    }
}
