//! Text helpers for copied UI content
//!
//! Browser copy output varies with platform and locale. These helpers bring it
//! into one shape before any label or signature scan runs.

use std::borrow::Cow;

/// Unicode horizontal ellipsis, rendered by some locales instead of "..."
const HORIZONTAL_ELLIPSIS: char = '\u{2026}';
const NO_BREAK_SPACE: char = '\u{00A0}';

/// Normalise line endings, ellipses and non-breaking spaces
///
/// Returns the input unchanged (borrowed) when nothing needs rewriting.
pub fn normalize_paste(text: &str) -> Cow<'_, str> {
    if !text.contains(&['\r', HORIZONTAL_ELLIPSIS, NO_BREAK_SPACE][..]) {
        return Cow::Borrowed(text);
    }

    let normalized = text
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace(HORIZONTAL_ELLIPSIS, "...")
        .replace(NO_BREAK_SPACE, " ");
    Cow::Owned(normalized)
}

/// Strip any leading and trailing run of non-alphanumeric ASCII characters
pub fn trim_non_alphanumeric(value: &str) -> &str {
    value
        .trim_start_matches(|c: char| !c.is_ascii_alphanumeric())
        .trim_end_matches(|c: char| !c.is_ascii_alphanumeric())
}

/// Case-insensitive (ASCII) substring search starting at byte offset `from`
///
/// ASCII lowercasing keeps byte offsets identical, so the returned index is
/// valid in the original haystack.
pub fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let tail = haystack.get(from..)?;
    tail.to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
        .map(|idx| idx + from)
}

/// Short single-line preview for log output
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .take(max_chars)
        .collect();

    if text.chars().count() > max_chars {
        format!("{}...", flat)
    } else {
        flat
    }
}
