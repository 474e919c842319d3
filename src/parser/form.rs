//! Destination form population
//!
//! The form itself lives outside the parser. It is reached only through
//! [`FormTarget`], and only [`apply_outcome`] writes to it: truncated or failed
//! parses never produce a write, and a successful parse first resets the form
//! so values from an earlier paste cannot survive into the new one.

use super::outcome::PasteOutcome;
use crate::types::{FieldName, ParsedTransactionFields};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Inputs of the hash calculator form that a paste can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Address,
    To,
    Value,
    Data,
    Operation,
    SafeTxGas,
    BaseGas,
    GasPrice,
    GasToken,
    RefundReceiver,
    Nonce,
    Network,
}

impl FormField {
    /// Form input fed by a parsed transaction field; hashes are not form inputs
    pub fn for_field(field: FieldName) -> Option<Self> {
        match field {
            FieldName::SafeAddress => Some(Self::Address),
            FieldName::To => Some(Self::To),
            FieldName::Value => Some(Self::Value),
            FieldName::Data => Some(Self::Data),
            FieldName::Operation => Some(Self::Operation),
            FieldName::SafeTxGas => Some(Self::SafeTxGas),
            FieldName::BaseGas => Some(Self::BaseGas),
            FieldName::GasPrice => Some(Self::GasPrice),
            FieldName::GasToken => Some(Self::GasToken),
            FieldName::RefundReceiver => Some(Self::RefundReceiver),
            FieldName::Nonce => Some(Self::Nonce),
            FieldName::SafeTxHash | FieldName::DomainHash | FieldName::MessageHash => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Address => "address",
            Self::To => "to",
            Self::Value => "value",
            Self::Data => "data",
            Self::Operation => "operation",
            Self::SafeTxGas => "safeTxGas",
            Self::BaseGas => "baseGas",
            Self::GasPrice => "gasPrice",
            Self::GasToken => "gasToken",
            Self::RefundReceiver => "refundReceiver",
            Self::Nonce => "nonce",
            Self::Network => "network",
        };
        f.write_str(name)
    }
}

/// Write interface of the destination form
pub trait FormTarget {
    /// Clear every transaction input, keeping the method and version selection
    fn reset_preserving_selection(&mut self);

    fn set_text(&mut self, field: FormField, value: &str);

    fn set_chain_id(&mut self, chain_id: u64);
}

/// In-memory hash calculator form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionForm {
    /// "direct" or "api"
    pub method: String,
    /// Safe contract version
    pub version: String,
    pub network: String,
    pub chain_id: u64,
    pub address: String,
    pub to: String,
    pub value: String,
    pub data: String,
    pub operation: String,
    pub safe_tx_gas: String,
    pub base_gas: String,
    pub gas_price: String,
    pub gas_token: String,
    pub refund_receiver: String,
    pub nonce: String,
}

impl TransactionForm {
    pub fn new(method: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            version: version.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Address => &self.address,
            FormField::To => &self.to,
            FormField::Value => &self.value,
            FormField::Data => &self.data,
            FormField::Operation => &self.operation,
            FormField::SafeTxGas => &self.safe_tx_gas,
            FormField::BaseGas => &self.base_gas,
            FormField::GasPrice => &self.gas_price,
            FormField::GasToken => &self.gas_token,
            FormField::RefundReceiver => &self.refund_receiver,
            FormField::Nonce => &self.nonce,
            FormField::Network => &self.network,
        }
    }
}

impl FormTarget for TransactionForm {
    fn reset_preserving_selection(&mut self) {
        *self = Self::new(std::mem::take(&mut self.method), std::mem::take(&mut self.version));
    }

    fn set_text(&mut self, field: FormField, value: &str) {
        let slot = match field {
            FormField::Address => &mut self.address,
            FormField::To => &mut self.to,
            FormField::Value => &mut self.value,
            FormField::Data => &mut self.data,
            FormField::Operation => &mut self.operation,
            FormField::SafeTxGas => &mut self.safe_tx_gas,
            FormField::BaseGas => &mut self.base_gas,
            FormField::GasPrice => &mut self.gas_price,
            FormField::GasToken => &mut self.gas_token,
            FormField::RefundReceiver => &mut self.refund_receiver,
            FormField::Nonce => &mut self.nonce,
            FormField::Network => &mut self.network,
        };
        *slot = value.to_string();
    }

    fn set_chain_id(&mut self, chain_id: u64) {
        self.chain_id = chain_id;
    }
}

/// Write every present form value of `fields` into `form`
fn populate<F: FormTarget + ?Sized>(fields: &ParsedTransactionFields, form: &mut F) {
    for (field, value) in fields.present_fields() {
        if let Some(form_field) = FormField::for_field(field) {
            form.set_text(form_field, value);
        }
    }
    if let Some(network) = &fields.network {
        form.set_text(FormField::Network, network);
    }
    if let Some(chain_id) = fields.chain_id {
        form.set_chain_id(chain_id);
    }
}

/// Apply a paste outcome to the destination form
///
/// Only `Complete` and `PartialFields` outcomes write: the form is reset to its
/// baseline first, then populated. Returns whether anything was written.
pub fn apply_outcome<F: FormTarget + ?Sized>(outcome: &PasteOutcome, form: &mut F) -> bool {
    let fields = match outcome {
        PasteOutcome::Complete { fields } | PasteOutcome::PartialFields { fields, .. } => fields,
        _ => {
            debug!("Outcome not applicable, form left untouched");
            return false;
        }
    };

    form.reset_preserving_selection();
    populate(fields, form);
    true
}
