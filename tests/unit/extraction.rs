//! Field extraction properties
//!
//! - extraction is a pure function of its input
//! - elided zero addresses are canonicalised in every address field
//! - removing one label only affects that label's field

use safe_paste_parser::parser::{extract_field, extract_fields, PasteParser};
use safe_paste_parser::shared::ZERO_ADDRESS;
use safe_paste_parser::types::FieldName;

use crate::common::bundled_registry;
use crate::common::fixtures::{self, full_paste, paste_with_line, paste_without};

#[test]
fn test_extraction_is_idempotent() {
    let text = full_paste();
    for label in ["to:", "value:", "data:", "nonce:", "Domain hash:"] {
        assert_eq!(
            extract_field(&text, label, None),
            extract_field(&text, label, None),
            "label {}",
            label
        );
    }

    let registry = bundled_registry();
    let parser = PasteParser::new(&registry);
    assert_eq!(parser.parse(&text), parser.parse(&text));
}

#[test]
fn test_fixture_extracts_every_field() {
    let fields = extract_fields(&full_paste()).fields;
    assert_eq!(fields.safe_address.as_deref(), Some(fixtures::SAFE_ADDRESS));
    assert_eq!(fields.to.as_deref(), Some(fixtures::RECIPIENT));
    assert_eq!(fields.value.as_deref(), Some("0"));
    assert_eq!(fields.data.as_deref(), Some(fixtures::CALL_DATA));
    assert_eq!(fields.operation.as_deref(), Some("0"));
    assert_eq!(fields.safe_tx_gas.as_deref(), Some("0"));
    assert_eq!(fields.base_gas.as_deref(), Some("0"));
    assert_eq!(fields.gas_price.as_deref(), Some("0"));
    assert_eq!(fields.nonce.as_deref(), Some("42"));
    assert_eq!(fields.safe_tx_hash.as_deref(), Some(fixtures::SAFE_TX_HASH));
    assert_eq!(fields.domain_hash.as_deref(), Some(fixtures::DOMAIN_HASH));
    assert_eq!(fields.message_hash.as_deref(), Some(fixtures::MESSAGE_HASH));
}

#[test]
fn test_zero_address_canonical_in_all_address_fields() {
    let elided_forms = [
        "0x0...0",
        "0x0000...0000",
        "0x00000000......00000000",
        "eth:0x0000...0000",
        "0x0000...0000 (ETH)",
    ];
    let address_fields = [
        (FieldName::SafeAddress, "Safe:"),
        (FieldName::To, "to:"),
        (FieldName::GasToken, "gasToken:"),
        (FieldName::RefundReceiver, "refundReceiver:"),
    ];

    for (field, label) in address_fields {
        for elided in elided_forms {
            let text = paste_with_line(field, &format!("{} {}", label, elided));
            let fields = extract_fields(&text).fields;
            assert_eq!(
                fields.get(field),
                Some(ZERO_ADDRESS),
                "{} with {}",
                field,
                elided
            );
        }
    }
}

#[test]
fn test_removing_one_label_only_affects_that_field() {
    let baseline = extract_fields(&full_paste()).fields;

    for removed in FieldName::ALL {
        let fields = extract_fields(&paste_without(removed)).fields;
        for field in FieldName::ALL {
            if field == removed {
                assert_eq!(fields.get(field), None, "{} should be absent", field);
            } else {
                assert_eq!(
                    fields.get(field),
                    baseline.get(field),
                    "{} changed after removing {}",
                    field,
                    removed
                );
            }
        }
    }
}

#[test]
fn test_value_and_label_on_separate_lines() {
    let text = "to:\n0x3333333333333333333333333333333333333333\nvalue:\n1000\ndata:\n0x\noperation:\n0\n";
    let fields = extract_fields(text).fields;
    assert_eq!(
        fields.to.as_deref(),
        Some("0x3333333333333333333333333333333333333333")
    );
    assert_eq!(fields.value.as_deref(), Some("1000"));
    assert_eq!(fields.data.as_deref(), Some("0x"));
    assert_eq!(fields.operation.as_deref(), Some("0"));
}

#[test]
fn test_annotated_zero_address_is_applied_canonically() {
    let text = paste_with_line(FieldName::GasToken, "gasToken: 0x0000...0000 (ETH)")
        .replace("refundReceiver: 0x0000...0000", "refundReceiver: eth:0x0000...0000");

    let registry = bundled_registry();
    let outcome = PasteParser::new(&registry).evaluate(&text);
    assert!(outcome.is_applicable(), "got {:?}", outcome);

    let fields = outcome.fields().unwrap();
    assert_eq!(fields.gas_token.as_deref(), Some(ZERO_ADDRESS));
    assert_eq!(fields.refund_receiver.as_deref(), Some(ZERO_ADDRESS));
}
