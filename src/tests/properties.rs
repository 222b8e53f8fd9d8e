use crate::model::TableEvent;
use crate::test_harness::{alert_markup, alert_table, wide_table};
use crate::view_state::render;
use crate::{create_table, TableState};

fn events(mut state: TableState, events: Vec<TableEvent>) -> TableState {
    for event in events {
        state = state.handle_event(event);
    }
    state
}

#[test]
fn create_table_uses_the_default_configuration() {
    let state = create_table(&alert_markup());
    assert_eq!(state.config().table_width, 1750.0);
    assert_eq!(state.row_count(), 3);
}

#[test]
fn create_table_degrades_malformed_input_to_an_empty_table() {
    for markup in ["", "not markup at all", "<table><tbody><tr>"] {
        let state = create_table(markup);
        assert_eq!(state.row_count(), 0);
    }
}

// A row expansion always mirrors the visible column set at the moment it
// opens: one entry per visible column, in master order.
#[test]
fn expansion_mirrors_the_visible_column_set() {
    let state = events(
        alert_table(),
        vec![
            TableEvent::ToggleColumn {
                index: 2,
                show: false,
            },
            TableEvent::ToggleRowExpansion { row: 1 },
        ],
    );

    let keys: Vec<&str> = state
        .expansion(1)
        .unwrap()
        .entries()
        .iter()
        .map(|e| e.key())
        .collect();
    assert_eq!(keys, vec!["name", "severity", "entities"]);
}

// Toggling the same thing twice is the identity on the whole state.
#[test]
fn paired_toggles_are_involutions() {
    let original = alert_table();

    let state = events(
        original.clone(),
        vec![
            TableEvent::ToggleRowExpansion { row: 0 },
            TableEvent::ToggleRowExpansion { row: 0 },
        ],
    );
    assert_eq!(state, original);

    let state = events(
        original.clone(),
        vec![
            TableEvent::ToggleColumn {
                index: 0,
                show: false,
            },
            TableEvent::ToggleColumn {
                index: 0,
                show: true,
            },
        ],
    );
    assert_eq!(state, original);
}

// Three sort clicks on one column cycle back to the unsorted state.
#[test]
fn a_full_sort_cycle_is_the_identity() {
    let original = alert_table();
    let state = events(
        original.clone(),
        vec![
            TableEvent::SortColumn { index: 1 },
            TableEvent::SortColumn { index: 1 },
            TableEvent::SortColumn { index: 1 },
        ],
    );
    assert_eq!(state, original);
}

// Any reorder or filter invalidates every open expansion.
#[test]
fn reorders_and_filters_close_all_expansions() {
    let expanded = events(
        alert_table(),
        vec![
            TableEvent::ToggleRowExpansion { row: 0 },
            TableEvent::ToggleRowExpansion { row: 2 },
        ],
    );
    assert_eq!(expanded.open_expansion_count(), 2);

    let sorted = expanded.clone().handle_event(TableEvent::SortColumn { index: 0 });
    assert_eq!(sorted.open_expansion_count(), 0);

    let filtered = expanded.handle_event(TableEvent::SetFilter {
        index: 0,
        text: "a".to_string(),
    });
    assert_eq!(filtered.open_expansion_count(), 0);
}

// A drag never changes the total table width and never pushes a column
// to or under the header floor.
#[test]
fn drags_conserve_total_width_and_respect_the_floor() {
    let state = wide_table(5);
    let total: f64 = state.layout().widths().iter().sum();
    let floor = state.config().min_header_width;

    let state = events(
        state,
        vec![
            TableEvent::BeginResize { index: 1, x: 0.0 },
            TableEvent::ResizeMove { x: 180.0 },
            TableEvent::ResizeMove { x: 400.0 },
            TableEvent::ResizeMove { x: 150.0 },
            TableEvent::ResizeMove { x: -900.0 },
            TableEvent::EndResize,
        ],
    );

    let after: f64 = state.layout().widths().iter().sum();
    assert!((total - after).abs() < 1e-6);
    for width in state.layout().widths() {
        assert!(width > floor);
    }
}

// Row visibility is always the verdict of the single most recent filter
// event, whichever column it targeted.
#[test]
fn the_most_recent_filter_event_owns_visibility() {
    let state = events(
        alert_table(),
        vec![
            TableEvent::SetFilter {
                index: 0,
                text: "disk".to_string(),
            },
            TableEvent::SetFilter {
                index: 1,
                text: "informational".to_string(),
            },
        ],
    );
    assert_eq!(state.visible_rows(), vec![2]);

    // An empty follow-up pass shows everything again.
    let state = state.handle_event(TableEvent::SetFilter {
        index: 2,
        text: String::new(),
    });
    assert_eq!(state.visible_row_count(), 3);
}

// The disclosure control lives in the first visible column, or nowhere.
#[test]
fn the_control_tracks_the_first_visible_column() {
    let mut state = alert_table();
    let script = vec![
        TableEvent::ToggleColumn {
            index: 0,
            show: false,
        },
        TableEvent::ToggleColumn {
            index: 2,
            show: false,
        },
        TableEvent::ToggleColumn {
            index: 1,
            show: false,
        },
        TableEvent::ToggleColumn {
            index: 2,
            show: true,
        },
        TableEvent::ToggleAllColumns { show: false },
        TableEvent::ToggleAllColumns { show: true },
    ];

    for event in script {
        state = state.handle_event(event);
        assert_eq!(state.control_column(), state.first_visible_column());
    }
}

// Rendering is a pure projection: repeatable, and never a source of truth.
#[test]
fn rendering_is_deterministic() {
    let state = events(
        alert_table(),
        vec![
            TableEvent::SortColumn { index: 2 },
            TableEvent::ToggleRowExpansion { row: 1 },
        ],
    );

    let first = render(&state);
    let second = render(&state);
    assert_eq!(first, second);
}

// Unknown indices in any event are defensive no-ops across the board.
#[test]
fn out_of_range_events_leave_the_state_untouched() {
    let original = alert_table();
    let script = vec![
        TableEvent::ToggleRowExpansion { row: 99 },
        TableEvent::ToggleStructuredValue {
            row: 0,
            path: vec![0],
        },
        TableEvent::ToggleColumn {
            index: 99,
            show: false,
        },
        TableEvent::SortColumn { index: 99 },
        TableEvent::SetFilter {
            index: 99,
            text: "x".to_string(),
        },
        TableEvent::ToggleFilterDropdown { index: 99 },
        TableEvent::ResizeMove { x: 500.0 },
        TableEvent::EndResize,
    ];

    let state = events(original.clone(), script);
    assert_eq!(state, original);
}
