//! Paste-to-fields parser for Safe transaction details
//!
//! Turns text copied from the Safe web UI into [`ParsedTransactionFields`]:
//!
//! 1. normalise the paste (line endings, ellipses, spaces)
//! 2. extract every field of the label chain
//! 3. run the truncation signatures over the text and the raw `data` value
//! 4. resolve the network from the first `shortname:0x...` token
//!
//! [`PasteParser::evaluate`] then classifies the result into a single
//! [`PasteOutcome`]. Any truncation finding makes the outcome diagnostic only.

pub mod extraction;
pub mod form;
pub mod labels;
pub mod network;
pub mod outcome;

pub use extraction::{extract_field, extract_fields, ExtractedFields, ExtractedValue};
pub use form::{apply_outcome, FormField, FormTarget, TransactionForm};
pub use labels::{FieldLabel, LABEL_CHAIN};
pub use network::{resolve_network, NetworkResolution};
pub use outcome::{PasteOutcome, Severity};

use crate::chains::ChainRegistry;
use crate::detection::truncation::{detect_truncation, TruncationInput};
use crate::shared::text::{normalize_paste, preview};
use crate::types::ParsedTransactionFields;
use tracing::debug;

/// Characters of pasted text included in debug logs
const LOG_PREVIEW_CHARS: usize = 100;

/// Parser bound to a set of lookup tables
///
/// Holds only a shared reference to immutable tables, so one parser (or many)
/// can be used from several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct PasteParser<'a> {
    registry: &'a ChainRegistry,
}

impl<'a> PasteParser<'a> {
    pub fn new(registry: &'a ChainRegistry) -> Self {
        Self { registry }
    }

    /// Extract every recognisable field; never fails
    pub fn parse(&self, text: &str) -> ParsedTransactionFields {
        let text = normalize_paste(text);

        let ExtractedFields {
            mut fields,
            raw_data,
        } = extract_fields(&text);

        let truncation_input = TruncationInput::new(&text)
            .with_data(raw_data.as_deref(), fields.data.as_deref());
        fields.truncated_fields = detect_truncation(&truncation_input);

        let network = resolve_network(&text, self.registry);
        fields.chain_id = network.chain_id;
        fields.network = network.network;
        fields.detected_short_name = network.detected_short_name;
        fields.all_network_short_names = network.all_network_short_names;

        debug!(
            "Parsed paste '{}': {} fields, truncated={:?}, ellipsis={}, show_more={}",
            preview(&text, LOG_PREVIEW_CHARS),
            fields.present_fields().count(),
            fields.truncated_fields,
            text.contains("..."),
            text.to_lowercase().contains("show more"),
        );

        fields
    }

    /// Parse and classify a paste into exactly one outcome
    pub fn evaluate(&self, text: &str) -> PasteOutcome {
        if text.trim().is_empty() {
            return PasteOutcome::EmptyInput;
        }

        let fields = self.parse(text);

        if !fields.has_any_field() {
            return PasteOutcome::NoRecognizedFields;
        }

        if fields.is_truncated() {
            return PasteOutcome::TruncatedContent { fields };
        }

        let missing = fields.missing_essential_fields();
        if missing.is_empty() {
            PasteOutcome::Complete { fields }
        } else {
            PasteOutcome::PartialFields { fields, missing }
        }
    }
}

/// Parse a paste against the given tables
pub fn parse_safe_transaction_text(text: &str, registry: &ChainRegistry) -> ParsedTransactionFields {
    PasteParser::new(registry).parse(text)
}
