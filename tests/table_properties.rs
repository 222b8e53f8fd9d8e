//! Property tests over the public API.

use alertgrid::model::format_timestamp;
use alertgrid::{create_table, TableEvent, TableState};
use proptest::prelude::*;

fn markup_from(rows: &[Vec<(String, String)>]) -> String {
    let escape = |text: &str| {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    };

    let mut out = String::from("<table><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for (column, text) in row {
            out.push_str(&format!(
                r#"<td data-column="{}">{}</td>"#,
                column,
                escape(text)
            ));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

fn plain_table(column: &str, values: &[String]) -> TableState {
    let rows: Vec<Vec<(String, String)>> = values
        .iter()
        .map(|v| vec![(column.to_string(), v.clone())])
        .collect();
    create_table(&markup_from(&rows))
}

fn five_column_table() -> TableState {
    let row: Vec<(String, String)> = (0..5).map(|i| (format!("c{i}"), "x".to_string())).collect();
    create_table(&markup_from(&[row]))
}

proptest! {
    // A drag of any shape conserves total table width and never leaves a
    // column at or under the header floor.
    #[test]
    fn drag_sequences_conserve_width_and_floor(
        start in -200.0f64..200.0,
        moves in prop::collection::vec(-600.0f64..600.0, 0..12),
    ) {
        let mut state = five_column_table();
        let total: f64 = state.layout().widths().iter().sum();
        let floor = state.config().min_header_width;

        state = state.handle_event(TableEvent::BeginResize { index: 2, x: start });
        for x in moves {
            state = state.handle_event(TableEvent::ResizeMove { x });
        }
        state = state.handle_event(TableEvent::EndResize);

        let after: f64 = state.layout().widths().iter().sum();
        prop_assert!((total - after).abs() < 1e-6);
        for width in state.layout().widths() {
            prop_assert!(width > floor);
        }
    }

    // Cancellation mid-drag keeps the same invariants and releases the
    // gesture.
    #[test]
    fn cancelled_drags_leave_a_consistent_state(
        moves in prop::collection::vec(-600.0f64..600.0, 0..8),
    ) {
        let mut state = five_column_table();
        let total: f64 = state.layout().widths().iter().sum();

        state = state.handle_event(TableEvent::BeginResize { index: 0, x: 0.0 });
        for x in moves {
            state = state.handle_event(TableEvent::ResizeMove { x });
        }
        state = state.handle_event(TableEvent::CancelResize);

        prop_assert!(state.gesture().is_none());
        let after: f64 = state.layout().widths().iter().sum();
        prop_assert!((total - after).abs() < 1e-6);
    }

    // Text without the exact UTC shape passes through untouched.
    #[test]
    fn non_utc_text_formats_to_itself(text in "[a-zA-Z0-9 .:,-]{0,30}") {
        prop_assume!(!text.ends_with('Z'));
        prop_assert_eq!(format_timestamp(&text), text);
    }

    // Three sort clicks on one column always restore the original order.
    #[test]
    fn a_full_sort_cycle_restores_row_order(
        values in prop::collection::vec("[a-z]{0,8}", 1..20),
    ) {
        let mut state = plain_table("name", &values);
        for _ in 0..3 {
            state = state.handle_event(TableEvent::SortColumn { index: 0 });
        }
        let identity: Vec<usize> = (0..values.len()).collect();
        prop_assert_eq!(state.row_order(), identity.as_slice());
    }

    // Sorting permutes the display order without losing or inventing rows.
    #[test]
    fn sorting_is_a_permutation(
        values in prop::collection::vec("[a-z]{0,8}", 1..20),
    ) {
        let state = plain_table("name", &values)
            .handle_event(TableEvent::SortColumn { index: 0 });

        let mut order = state.row_order().to_vec();
        order.sort_unstable();
        let identity: Vec<usize> = (0..values.len()).collect();
        prop_assert_eq!(order, identity);
    }

    // A contains-filter shows exactly the rows whose cell text contains
    // the filter, case-insensitively.
    #[test]
    fn contains_filter_matches_substring_semantics(
        values in prop::collection::vec("[a-zA-Z]{0,8}", 1..20),
        needle in "[a-z]{1,3}",
    ) {
        let state = plain_table("name", &values).handle_event(TableEvent::SetFilter {
            index: 0,
            text: needle.clone(),
        });

        for (row, value) in values.iter().enumerate() {
            let expected = value.to_lowercase().contains(&needle);
            prop_assert_eq!(state.is_row_visible(row), expected);
        }
    }

    // Every expansion toggle pair is the identity, from any starting row.
    #[test]
    fn row_expansion_toggle_is_an_involution(
        values in prop::collection::vec("[a-z]{0,8}", 1..10),
        row in 0usize..10,
    ) {
        let original = plain_table("name", &values);
        let state = original
            .clone()
            .handle_event(TableEvent::ToggleRowExpansion { row })
            .handle_event(TableEvent::ToggleRowExpansion { row });
        prop_assert_eq!(state, original);
    }
}
