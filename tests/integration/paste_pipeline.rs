//! Paste pipeline scenarios
//!
//! Raw text -> outcome -> form, covering the user-visible cases: truncated
//! data, complete paste, elided zero address, missing nonce and empty input.

use safe_paste_parser::parser::{apply_outcome, FormField, PasteOutcome, PasteParser, TransactionForm};
use safe_paste_parser::shared::ZERO_ADDRESS;
use safe_paste_parser::types::{EssentialField, FieldName};

use crate::common::bundled_registry;
use crate::common::fixtures::{self, full_paste, paste_with_line, paste_without};
use crate::common::recording_form::{FormWrite, RecordingForm};

#[test]
fn test_truncated_data_withholds_fields() {
    let registry = bundled_registry();
    let text = "to:0xABCDEF0000000000000000000000000000000001\nvalue:0\ndata:0x a9059cbb...\noperation:0\nsafeTxGas:0";

    let outcome = PasteParser::new(&registry).evaluate(text);
    let PasteOutcome::TruncatedContent { fields } = &outcome else {
        panic!("expected truncated outcome, got {:?}", outcome);
    };

    assert_eq!(fields.truncated_fields.iter().copied().collect::<Vec<_>>(), vec![FieldName::Data]);
    assert_eq!(
        fields.to.as_deref(),
        Some("0xABCDEF0000000000000000000000000000000001")
    );
    assert_eq!(fields.value.as_deref(), Some("0"));
    assert_eq!(fields.operation.as_deref(), Some("0"));

    let mut form = RecordingForm::default();
    assert!(!apply_outcome(&outcome, &mut form));
    assert!(form.writes.is_empty());
}

#[test]
fn test_complete_paste_populates_form() {
    let registry = bundled_registry();
    let outcome = PasteParser::new(&registry).evaluate(&full_paste());

    let PasteOutcome::Complete { fields } = &outcome else {
        panic!("expected complete outcome, got {:?}", outcome);
    };
    assert_eq!(fields.network.as_deref(), Some("ethereum"));
    assert_eq!(fields.chain_id, Some(1));
    assert!(fields.missing_essential_fields().is_empty());

    let mut form = RecordingForm::default();
    assert!(apply_outcome(&outcome, &mut form));
    assert_eq!(form.writes.first(), Some(&FormWrite::Reset));
    assert!(form.writes.contains(&FormWrite::ChainId(1)));

    let writes = form.text_writes();
    assert!(writes.contains(&(FormField::Address, fixtures::SAFE_ADDRESS)));
    assert!(writes.contains(&(FormField::Data, fixtures::CALL_DATA)));
    assert!(writes.contains(&(FormField::Network, "ethereum")));
    // Hashes are for comparison only, never form inputs
    assert!(!writes.iter().any(|(_, value)| *value == fixtures::SAFE_TX_HASH));
}

#[test]
fn test_elided_gas_token_is_zero_address() {
    let registry = bundled_registry();
    let text = paste_with_line(FieldName::GasToken, "gasToken:0x0000...0000");
    let outcome = PasteParser::new(&registry).evaluate(&text);

    let fields = outcome.fields().unwrap();
    assert_eq!(fields.gas_token.as_deref(), Some(ZERO_ADDRESS));
    assert!(outcome.is_applicable());
}

#[test]
fn test_missing_nonce_reports_manual_entry() {
    let registry = bundled_registry();
    let outcome = PasteParser::new(&registry).evaluate(&paste_without(FieldName::Nonce));

    let PasteOutcome::PartialFields { fields, missing } = &outcome else {
        panic!("expected partial outcome, got {:?}", outcome);
    };
    assert_eq!(missing, &vec![EssentialField::Nonce]);
    assert_eq!(missing[0].label(), "Transaction nonce");
    assert!(outcome.guidance().contains("Transaction nonce"));
    assert_eq!(fields.to.as_deref(), Some(fixtures::RECIPIENT));

    let mut form = TransactionForm::new("direct", "1.4.1");
    assert!(apply_outcome(&outcome, &mut form));
    assert_eq!(form.nonce, "");
    assert_eq!(form.get(FormField::Data), fixtures::CALL_DATA);
}

#[test]
fn test_empty_input() {
    let registry = bundled_registry();
    let outcome = PasteParser::new(&registry).evaluate("");
    assert_eq!(outcome, PasteOutcome::EmptyInput);
    assert!(outcome.fields().is_none());
}

#[test]
fn test_second_paste_does_not_inherit_stale_values() {
    let registry = bundled_registry();
    let parser = PasteParser::new(&registry);
    let mut form = TransactionForm::new("direct", "1.3.0");

    assert!(apply_outcome(&parser.evaluate(&full_paste()), &mut form));
    assert_eq!(form.nonce, "42");
    assert_eq!(form.gas_token, ZERO_ADDRESS);

    let second = paste_without(FieldName::GasToken).replace("nonce: 42", "nonce: 43");
    assert!(apply_outcome(&parser.evaluate(&second), &mut form));
    assert_eq!(form.nonce, "43");
    assert_eq!(form.gas_token, "");
    assert_eq!(form.version, "1.3.0");
    assert_eq!(form.method, "direct");
}

#[test]
fn test_truncated_paste_leaves_previous_form_untouched() {
    let registry = bundled_registry();
    let parser = PasteParser::new(&registry);
    let mut form = TransactionForm::new("direct", "1.3.0");
    apply_outcome(&parser.evaluate(&full_paste()), &mut form);
    let before = form.clone();

    let truncated = paste_with_line(FieldName::Data, "data: 0xa9059cbb00000000...");
    assert!(!apply_outcome(&parser.evaluate(&truncated), &mut form));
    assert_eq!(form, before);
}

#[test]
fn test_windows_line_endings_parse_identically() {
    let registry = bundled_registry();
    let parser = PasteParser::new(&registry);
    let crlf = full_paste().replace('\n', "\r\n");
    assert_eq!(parser.parse(&crlf), parser.parse(&full_paste()));
}

#[test]
fn test_concurrent_parses_match_sequential() {
    let registry = bundled_registry();
    let parser = PasteParser::new(&registry);
    let pastes = vec![
        full_paste(),
        paste_without(FieldName::Nonce),
        paste_with_line(FieldName::Data, "data: 0xa9059cbb..."),
        String::new(),
        "nothing to see".to_string(),
    ];

    let sequential: Vec<_> = pastes.iter().map(|p| parser.evaluate(p)).collect();
    let concurrent = crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = pastes
            .iter()
            .map(|paste| scope.spawn(move |_| parser.evaluate(paste)))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    })
    .unwrap();

    assert_eq!(sequential, concurrent);
}
