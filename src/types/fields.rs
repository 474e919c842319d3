//! Parsed transaction field types
//!
//! `ParsedTransactionFields` is the single output record of a paste parse.
//! Every field is independently optional: `None` means the label was not
//! found, never "empty".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Transaction fields the extractor recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    SafeAddress,
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
    SafeTxHash,
    DomainHash,
    MessageHash,
}

impl FieldName {
    /// All fields, in the order the source UI lists them
    pub const ALL: [FieldName; 14] = [
        Self::SafeAddress,
        Self::To,
        Self::Value,
        Self::Data,
        Self::Operation,
        Self::SafeTxGas,
        Self::BaseGas,
        Self::GasPrice,
        Self::GasToken,
        Self::RefundReceiver,
        Self::Nonce,
        Self::SafeTxHash,
        Self::DomainHash,
        Self::MessageHash,
    ];

    /// Wire name, as used in JSON output and truncation warnings
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SafeAddress => "safeAddress",
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
            Self::SafeTxHash => "safeTxHash",
            Self::DomainHash => "domainHash",
            Self::MessageHash => "messageHash",
        }
    }

    /// Fields holding a 20-byte address
    pub const fn is_address(&self) -> bool {
        matches!(
            self,
            Self::SafeAddress | Self::To | Self::GasToken | Self::RefundReceiver
        )
    }

    /// Gas and refund parameters; missing ones are tolerated silently
    pub const fn is_optional(&self) -> bool {
        matches!(
            self,
            Self::SafeTxGas | Self::BaseGas | Self::GasPrice | Self::GasToken | Self::RefundReceiver
        )
    }

    /// Label shown to the user for optional fields
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::SafeAddress => "Safe Address",
            Self::To => "Recipient address",
            Self::Value => "Transaction value",
            Self::Data => "Transaction data",
            Self::Operation => "Operation type",
            Self::SafeTxGas => "Safe TX gas",
            Self::BaseGas => "Base gas",
            Self::GasPrice => "Gas price",
            Self::GasToken => "Gas token",
            Self::RefundReceiver => "Refund receiver",
            Self::Nonce => "Transaction nonce",
            Self::SafeTxHash => "Safe transaction hash",
            Self::DomainHash => "Domain hash",
            Self::MessageHash => "Message hash",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Unknown field name: {}", s))
    }
}

/// Fields without which the downstream hash computation cannot proceed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EssentialField {
    SafeAddress,
    Recipient,
    Value,
    Data,
    Network,
    Operation,
    Nonce,
}

impl EssentialField {
    pub const ALL: [EssentialField; 7] = [
        Self::SafeAddress,
        Self::Recipient,
        Self::Value,
        Self::Data,
        Self::Network,
        Self::Operation,
        Self::Nonce,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::SafeAddress => "Safe Address",
            Self::Recipient => "Recipient address",
            Self::Value => "Transaction value",
            Self::Data => "Transaction data",
            Self::Network => "Network",
            Self::Operation => "Operation type",
            Self::Nonce => "Transaction nonce",
        }
    }

    /// Whether the parsed record carries a usable value for this field
    ///
    /// "0" is a legitimate value for value and operation.
    pub fn is_present(&self, fields: &ParsedTransactionFields) -> bool {
        let value = match self {
            Self::SafeAddress => fields.safe_address.as_deref(),
            Self::Recipient => fields.to.as_deref(),
            Self::Value => fields.value.as_deref(),
            Self::Data => fields.data.as_deref(),
            Self::Network => fields.network.as_deref(),
            Self::Operation => fields.operation.as_deref(),
            Self::Nonce => fields.nonce.as_deref(),
        };
        value.is_some_and(|v| !v.trim().is_empty())
    }
}

impl fmt::Display for EssentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of resolving the EIP-3770 shortname embedded in a paste
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkStatus {
    /// Shortname resolved to a chain id
    Resolved { chain_id: u64 },
    /// A `shortname:0x...` token was found but the shortname is unknown
    UnknownShortName(String),
    /// No `shortname:0x...` token in the text
    NoShortName,
}

/// Best-effort extraction result for one paste
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedTransactionFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_tx_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_receiver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_tx_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_hash: Option<String>,

    /// Canonical network value from the network directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Shortname exactly as it appeared in the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_short_name: Option<String>,
    /// Every shortname mapping to the resolved chain id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_network_short_names: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub truncated_fields: BTreeSet<FieldName>,
}

impl ParsedTransactionFields {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::SafeAddress => &self.safe_address,
            FieldName::To => &self.to,
            FieldName::Value => &self.value,
            FieldName::Data => &self.data,
            FieldName::Operation => &self.operation,
            FieldName::SafeTxGas => &self.safe_tx_gas,
            FieldName::BaseGas => &self.base_gas,
            FieldName::GasPrice => &self.gas_price,
            FieldName::GasToken => &self.gas_token,
            FieldName::RefundReceiver => &self.refund_receiver,
            FieldName::Nonce => &self.nonce,
            FieldName::SafeTxHash => &self.safe_tx_hash,
            FieldName::DomainHash => &self.domain_hash,
            FieldName::MessageHash => &self.message_hash,
        };
        value.as_deref()
    }

    pub fn set(&mut self, field: FieldName, value: Option<String>) {
        let slot = match field {
            FieldName::SafeAddress => &mut self.safe_address,
            FieldName::To => &mut self.to,
            FieldName::Value => &mut self.value,
            FieldName::Data => &mut self.data,
            FieldName::Operation => &mut self.operation,
            FieldName::SafeTxGas => &mut self.safe_tx_gas,
            FieldName::BaseGas => &mut self.base_gas,
            FieldName::GasPrice => &mut self.gas_price,
            FieldName::GasToken => &mut self.gas_token,
            FieldName::RefundReceiver => &mut self.refund_receiver,
            FieldName::Nonce => &mut self.nonce,
            FieldName::SafeTxHash => &mut self.safe_tx_hash,
            FieldName::DomainHash => &mut self.domain_hash,
            FieldName::MessageHash => &mut self.message_hash,
        };
        *slot = value;
    }

    /// Present transaction fields, in label-chain order
    pub fn present_fields(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    pub fn is_truncated(&self) -> bool {
        !self.truncated_fields.is_empty()
    }

    /// True when at least one transaction field or network value was found
    ///
    /// Shortname diagnostics and truncation flags alone do not count.
    pub fn has_any_field(&self) -> bool {
        self.present_fields().next().is_some() || self.network.is_some() || self.chain_id.is_some()
    }

    /// Essential fields that are absent, in display order
    pub fn missing_essential_fields(&self) -> Vec<EssentialField> {
        EssentialField::ALL
            .into_iter()
            .filter(|field| !field.is_present(self))
            .collect()
    }

    /// Gas and refund parameters the paste did not carry, in label-chain order
    pub fn missing_optional_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|field| field.is_optional() && self.get(*field).is_none())
            .collect()
    }

    pub fn network_status(&self) -> NetworkStatus {
        match (self.chain_id, &self.detected_short_name) {
            (Some(chain_id), _) => NetworkStatus::Resolved { chain_id },
            (None, Some(shortname)) => NetworkStatus::UnknownShortName(shortname.clone()),
            (None, None) => NetworkStatus::NoShortName,
        }
    }
}
