//! Assertion helpers for adapter state.

use pagelist_core::{FooterState, ListAdapter, ListUpdate, SlotKind};

/// Assert the slot layout: `rows` item slots followed by the footer slot when
/// pagination is enabled, and nothing after it.
pub fn assert_slot_layout<T, S, V>(adapter: &ListAdapter<T, S, V>, rows: usize, msg: &str) {
    let footer = adapter.footer_count();
    assert_eq!(
        adapter.item_count(),
        rows + footer,
        "{}: expected {} rows + {} footer",
        msg,
        rows,
        footer
    );
    for index in 0..rows {
        assert_eq!(
            adapter.slot_kind(index),
            Ok(SlotKind::Item),
            "{}: slot {} should be an item",
            msg,
            index
        );
    }
    if footer == 1 {
        assert_eq!(
            adapter.slot_kind(rows),
            Ok(SlotKind::Footer),
            "{}: footer should be the last slot",
            msg
        );
    }
    assert!(
        adapter.slot_kind(rows + footer).is_err(),
        "{}: no slot expected past index {}",
        msg,
        rows + footer
    );
}

pub fn assert_footer_state<T, S, V>(
    adapter: &ListAdapter<T, S, V>,
    expected: FooterState,
    msg: &str,
) {
    assert_eq!(
        adapter.footer_state(),
        expected,
        "{}: footer in {:?}, expected {:?}",
        msg,
        adapter.footer_state(),
        expected
    );
}

/// Assert the exact sequence of updates a host received.
pub fn assert_updates(actual: &[ListUpdate], expected: &[ListUpdate], msg: &str) {
    assert_eq!(actual, expected, "{}: unexpected update sequence", msg);
}

/// Assert that a list of rendered texts contains a fragment.
pub fn assert_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        texts.iter().any(|t| t.contains(fragment)),
        "{}: text '{}' not found in {:?}",
        msg,
        fragment,
        texts
    );
}

pub fn assert_not_contains_text(texts: &[String], fragment: &str, msg: &str) {
    assert!(
        !texts.iter().any(|t| t.contains(fragment)),
        "{}: text '{}' unexpectedly found in {:?}",
        msg,
        fragment,
        texts
    );
}
