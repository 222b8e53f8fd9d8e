//! Timestamp display formatting and chronological comparison.
//!
//! The display contract is a pure, total function: text matching
//! `YYYY-MM-DDThh:mm:ss.sss+Z` (UTC, at least three fractional digits) is
//! rewritten to `DD.MM.YYYY, hh:mm:ss.sss`; everything else passes through
//! unchanged.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Check the exact UTC ISO-8601 shape the display contract recognizes:
/// `\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3,}Z`.
fn is_utc_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    // Fixed prefix: date, 'T', time, '.'
    if bytes.len() < 24 {
        return false;
    }
    let digit = |i: usize| bytes[i].is_ascii_digit();
    let all_digits = |range: std::ops::Range<usize>| range.clone().all(digit);
    if !(all_digits(0..4) && bytes[4] == b'-' && all_digits(5..7) && bytes[7] == b'-') {
        return false;
    }
    if !(all_digits(8..10) && bytes[10] == b'T') {
        return false;
    }
    if !(all_digits(11..13)
        && bytes[13] == b':'
        && all_digits(14..16)
        && bytes[16] == b':'
        && all_digits(17..19)
        && bytes[19] == b'.')
    {
        return false;
    }
    // Three or more fractional digits, then a terminating 'Z'.
    let frac = &bytes[20..bytes.len() - 1];
    frac.len() >= 3 && frac.iter().all(u8::is_ascii_digit) && bytes[bytes.len() - 1] == b'Z'
}

/// Rewrite a UTC ISO-8601 timestamp into its display form, truncating the
/// fractional seconds to three digits. Non-matching text is returned as-is.
pub fn format_timestamp(text: &str) -> String {
    if !is_utc_shape(text) {
        return text.to_string();
    }

    format!(
        "{}.{}.{}, {}.{}",
        &text[8..10],  // DD
        &text[5..7],   // MM
        &text[0..4],   // YYYY
        &text[11..19], // hh:mm:ss
        &text[20..23], // sss
    )
}

/// Parse raw cell text into a UTC instant for sorting. `None` for anything
/// that is not in the recognized shape.
pub fn parse_utc(text: &str) -> Option<DateTime<Utc>> {
    if !is_utc_shape(text) {
        return None;
    }
    text.parse::<DateTime<Utc>>().ok()
}

/// Chronological comparison on raw cell text.
///
/// Unparsable values sort after parsable ones; two unparsable values fall
/// back to plain text comparison so the order stays total and stable.
pub fn compare_timestamps(a: &str, b: &str) -> Ordering {
    match (parse_utc(a), parse_utc(b)) {
        (Some(ta), Some(tb)) => ta.cmp(&tb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_utc_timestamp() {
        assert_eq!(
            format_timestamp("2024-03-05T07:08:09.123Z"),
            "05.03.2024, 07:08:09.123"
        );
    }

    #[test]
    fn truncates_extra_fractional_digits() {
        assert_eq!(
            format_timestamp("2024-03-05T07:08:09.1234567Z"),
            "05.03.2024, 07:08:09.123"
        );
    }

    #[test]
    fn non_matching_text_is_identity() {
        for text in [
            "not-a-date",
            "",
            "2024-03-05 07:08:09.123Z",    // missing 'T'
            "2024-03-05T07:08:09Z",        // no fractional part
            "2024-03-05T07:08:09.12Z",     // too few fractional digits
            "2024-03-05T07:08:09.123+01:00", // not 'Z'
            "2024-03-05T07:08:09.123Z extra",
        ] {
            assert_eq!(format_timestamp(text), text);
        }
    }

    #[test]
    fn parse_utc_accepts_matching_shape() {
        let parsed = parse_utc("2024-03-05T07:08:09.123Z").unwrap();
        assert_eq!(parsed.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn parse_utc_rejects_other_shapes() {
        assert!(parse_utc("05.03.2024, 07:08:09.123").is_none());
        assert!(parse_utc("2024-03-05T07:08:09Z").is_none());
    }

    #[test]
    fn compare_orders_chronologically() {
        assert_eq!(
            compare_timestamps("2024-03-05T07:08:09.123Z", "2024-03-05T07:08:09.124Z"),
            Ordering::Less
        );
        assert_eq!(
            compare_timestamps("2025-01-01T00:00:00.000Z", "2024-12-31T23:59:59.999Z"),
            Ordering::Greater
        );
    }

    #[test]
    fn unparsable_values_sort_last_and_fall_back_to_text() {
        assert_eq!(
            compare_timestamps("2024-03-05T07:08:09.123Z", "yesterday"),
            Ordering::Less
        );
        assert_eq!(compare_timestamps("a", "b"), Ordering::Less);
    }
}
