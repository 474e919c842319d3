//! Truncation signatures against realistic pastes
//!
//! Each case rewrites the data line of the full fixture the way the Safe UI
//! renders elided content, then checks the signature fires and that the
//! outcome withholds every transaction value from the form.

use safe_paste_parser::detection::{matching_signatures, TruncationInput};
use safe_paste_parser::parser::{apply_outcome, PasteOutcome, PasteParser};
use safe_paste_parser::types::FieldName;

use crate::common::bundled_registry;
use crate::common::fixtures::{full_paste, paste_with_line, CALL_DATA};
use crate::common::recording_form::RecordingForm;

fn fired_ids(text: &str) -> Vec<&'static str> {
    matching_signatures(&TruncationInput::new(text))
        .into_iter()
        .map(|signature| signature.id)
        .collect()
}

/// (signature id, paste that should trigger it)
fn truncated_cases() -> Vec<(&'static str, String)> {
    let odd_length = &CALL_DATA[..CALL_DATA.len() - 1];
    vec![
        (
            "S1",
            paste_with_line(FieldName::Data, &format!("data: {}...", &CALL_DATA[..24])),
        ),
        (
            "S2",
            full_paste().replace(
                "Balance change",
                &format!("Decoded: {}...\nBalance change", &CALL_DATA[..40]),
            ),
        ),
        (
            "S3",
            paste_with_line(
                FieldName::Data,
                &format!("data: {}\nShow more", &CALL_DATA[..74]),
            ),
        ),
        (
            "S4",
            paste_with_line(FieldName::Data, &format!("data: {}", odd_length)),
        ),
        (
            "S5",
            paste_with_line(
                FieldName::Data,
                &format!("data: {}operation: 0", &CALL_DATA[..74]),
            ),
        ),
        (
            "S6",
            paste_with_line(FieldName::Data, "data: 0x a9059cbb ..."),
        ),
        (
            "S7",
            full_paste().replace(
                "Balance change",
                "Raw: 0xa9059cbb0000..\nBalance change",
            ),
        ),
        (
            "R1",
            paste_with_line(FieldName::Data, "data: 0xa905"),
        ),
    ]
}

#[test]
fn test_full_paste_fires_no_signature() {
    assert!(fired_ids(&full_paste()).is_empty());
}

#[test]
fn test_each_signature_fires_on_its_case() {
    for (id, text) in truncated_cases() {
        let fired = fired_ids(&text);
        assert!(fired.contains(&id), "{} should fire, fired: {:?}", id, fired);
    }
}

#[test]
fn test_truncation_withholds_all_form_writes() {
    let registry = bundled_registry();
    let parser = PasteParser::new(&registry);

    for (id, text) in truncated_cases() {
        let outcome = parser.evaluate(&text);
        assert!(
            matches!(outcome, PasteOutcome::TruncatedContent { .. }),
            "{} should produce truncated outcome, got {:?}",
            id,
            outcome
        );
        assert_eq!(outcome.truncated_fields(), vec![FieldName::Data]);

        let mut form = RecordingForm::default();
        assert!(!apply_outcome(&outcome, &mut form));
        assert!(form.writes.is_empty(), "{} wrote {:?}", id, form.writes);
    }
}

#[test]
fn test_truncated_outcome_keeps_network_diagnostics() {
    let registry = bundled_registry();
    let (_, text) = truncated_cases().remove(0);
    let outcome = PasteParser::new(&registry).evaluate(&text);

    let fields = outcome.fields().expect("truncated outcome carries fields");
    assert_eq!(fields.network.as_deref(), Some("ethereum"));
    assert_eq!(fields.detected_short_name.as_deref(), Some("eth"));
}
