//! End-to-end pagination scenarios driven through the simulated host.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use pagelist_core::prelude::*;
use pagelist_testing::prelude::*;

type Adapter = ListAdapter<String, TestSlot, &'static str>;

fn page(range: Range<usize>) -> Vec<String> {
    range.map(|i| format!("Item {i}")).collect()
}

fn paged_adapter(rows: usize, config: PagingConfig) -> Adapter {
    let mut adapter = ListAdapter::new(page(0..rows), config, text_binder());
    adapter.set_loading_view(Some("loading"));
    adapter.set_failed_view(Some("failed"));
    adapter.set_end_view(Some("end"));
    adapter
}

struct Fixture {
    adapter: Adapter,
    host: SimulatedHost<&'static str>,
    loader: ScriptedLoader<String>,
}

fn linear_fixture(rows: usize, script: Vec<LoadResult<String>>) -> Fixture {
    let mut adapter = paged_adapter(rows, PagingConfig::paginated());
    let loader = ScriptedLoader::new(script);
    loader.install(&mut adapter);
    let mut host = SimulatedHost::linear(8);
    host.attach(&mut adapter).unwrap();
    Fixture {
        adapter,
        host,
        loader,
    }
}

#[test]
fn scenario_a_scrolling_to_the_end_requests_once() {
    let mut f = linear_fixture(20, vec![]);
    assert_slot_layout(&f.adapter, 20, "initial");
    assert_footer_state(&f.adapter, FooterState::Loading, "initial");

    let requested = f.host.scroll_to_end(&mut f.adapter).unwrap();

    assert_eq!(requested, 1);
    assert_eq!(f.loader.requests(), 1);
    assert!(f.host.is_footer_visible());
    assert_eq!(f.host.rendered_footer(), Some(&"loading"));
    assert_eq!(f.adapter.scroll_stats().requests, 1);
    assert_eq!(f.adapter.scroll_stats().suppressed, 1);
}

#[test]
fn scenario_a_last_data_row_triggers_with_trigger_distance() {
    let mut adapter = paged_adapter(20, PagingConfig::paginated().trigger_distance(1));
    let loader = ScriptedLoader::new(Vec::new());
    loader.install(&mut adapter);

    assert!(adapter.on_scrolled(0.0, 48.0, &LayoutGeometry::linear(19)));
    assert!(!adapter.on_scrolled(0.0, 48.0, &LayoutGeometry::linear(20)));
    assert_eq!(loader.requests(), 1);
}

#[test]
fn scenario_b_appended_page_keeps_footer_last_and_rearms() {
    let mut f = linear_fixture(20, vec![LoadResult::Page(page(20..41))]);
    f.host.scroll_to_end(&mut f.adapter).unwrap();
    f.host.take_updates();

    assert!(f.loader.deliver(&mut f.adapter));

    assert_eq!(f.adapter.item_count(), 42);
    assert_slot_layout(&f.adapter, 41, "after page");
    assert_footer_state(&f.adapter, FooterState::Loading, "after page");
    assert_updates(
        &f.host.take_updates(),
        &[ListUpdate::Inserted {
            start: 20,
            count: 21,
        }],
        "after page",
    );

    // The next arrival at the bottom asks for the following page.
    assert_eq!(f.host.scroll_to_end(&mut f.adapter).unwrap(), 1);
    assert_eq!(f.loader.requests(), 2);
    assert_contains_text(&f.host.visible_texts(), "Item 40", "bottom after page");
}

#[test]
fn scenario_c_end_of_data_stops_requests() {
    let mut f = linear_fixture(20, vec![LoadResult::EndOfData]);
    f.host.scroll_to_end(&mut f.adapter).unwrap();
    f.loader.deliver(&mut f.adapter);
    assert_footer_state(&f.adapter, FooterState::End, "after end");

    f.host.scroll_by(&mut f.adapter, -5).unwrap();
    f.host.scroll_to_end(&mut f.adapter).unwrap();
    f.host.settle(&mut f.adapter).unwrap();

    assert_eq!(f.loader.requests(), 1);
    assert_eq!(f.host.rendered_footer(), Some(&"end"));
}

#[test]
fn scenario_d_failure_then_tap_retries_once() {
    let mut f = linear_fixture(
        20,
        vec![
            LoadResult::Failed("offline".to_string()),
            LoadResult::Page(page(20..25)),
        ],
    );
    f.host.scroll_to_end(&mut f.adapter).unwrap();
    f.loader.deliver(&mut f.adapter);
    assert_footer_state(&f.adapter, FooterState::Failed, "after failure");

    f.host.layout(&mut f.adapter).unwrap();
    assert_eq!(f.host.rendered_footer(), Some(&"failed"));
    // Sitting on a failed footer never requests on its own.
    f.host.settle(&mut f.adapter).unwrap();
    assert_eq!(f.loader.requests(), 1);

    assert!(f.host.tap_footer(&mut f.adapter));
    assert_eq!(f.loader.requests(), 2);
    assert_footer_state(&f.adapter, FooterState::Loading, "after retry");

    // Scrolling while the retry is in flight does not duplicate it.
    f.host.settle(&mut f.adapter).unwrap();
    assert_eq!(f.loader.requests(), 2);

    assert!(f.loader.deliver(&mut f.adapter));
    assert_eq!(f.adapter.row_count(), 25);
}

#[test]
fn scenario_e_multi_lane_uses_the_furthest_lane() {
    let mut adapter = paged_adapter(19, PagingConfig::paginated());
    let loader = ScriptedLoader::new(Vec::new());
    loader.install(&mut adapter);
    assert_eq!(adapter.item_count(), 20);

    let geometry = LayoutGeometry::multi_lane([17, 19, 18]);
    assert!(adapter.on_scroll_state_changed(ScrollState::Idle, &geometry));
    assert!(!adapter.on_scrolled(0.0, 10.0, &geometry));
    assert_eq!(loader.requests(), 1);
}

#[test]
fn staggered_host_reports_footer_in_every_lane() {
    let mut adapter = paged_adapter(19, PagingConfig::paginated());
    let loader = ScriptedLoader::new(Vec::new());
    loader.install(&mut adapter);
    let mut host = SimulatedHost::staggered(3, 3);
    host.attach(&mut adapter).unwrap();

    assert_eq!(host.scroll_to_end(&mut adapter).unwrap(), 1);

    let geometry = host.geometry(&adapter);
    assert_eq!(geometry.last_visible_index(), Some(19));
    assert_eq!(adapter.is_full_span(19, &geometry), Ok(true));
    assert_eq!(adapter.is_full_span(18, &geometry), Ok(false));
}

#[test]
fn grid_footer_claims_a_full_row() {
    let mut adapter = paged_adapter(10, PagingConfig::paginated());
    let loader = ScriptedLoader::new(Vec::new());
    loader.install(&mut adapter);
    let mut host = SimulatedHost::grid(2, 3);
    host.attach(&mut adapter).unwrap();

    assert_eq!(host.scroll_to_end(&mut adapter).unwrap(), 1);

    let geometry = host.geometry(&adapter);
    assert_eq!(adapter.span_size(10, &geometry), Ok(2));
    assert_eq!(adapter.span_size(9, &geometry), Ok(1));
}

#[test]
fn repeated_arrivals_request_once_per_loading_entry() {
    let mut f = linear_fixture(
        20,
        vec![LoadResult::Page(page(20..30)), LoadResult::LastPage(page(30..32))],
    );

    for _ in 0..3 {
        f.host.scroll_to_end(&mut f.adapter).unwrap();
        f.host.scroll_by(&mut f.adapter, -2).unwrap();
    }
    assert_eq!(f.loader.requests(), 1);

    f.loader.deliver(&mut f.adapter);
    for _ in 0..3 {
        f.host.scroll_to_end(&mut f.adapter).unwrap();
        f.host.scroll_by(&mut f.adapter, -2).unwrap();
    }
    assert_eq!(f.loader.requests(), 2);

    f.loader.deliver(&mut f.adapter);
    assert_footer_state(&f.adapter, FooterState::End, "after last page");
    f.host.scroll_to_end(&mut f.adapter).unwrap();
    assert_eq!(f.loader.requests(), 2);
    assert_slot_layout(&f.adapter, 32, "final");
}

#[test]
fn item_click_reports_slot_row_and_index() {
    let mut f = linear_fixture(20, vec![]);
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    f.adapter
        .set_on_item_click(move |slot: &TestSlot, row: &String, index| {
            sink.borrow_mut().push((slot.text.clone(), row.clone(), index));
        });

    assert_eq!(f.host.tap_item(&mut f.adapter, 3), Ok(true));
    // Not visible: nothing to tap.
    assert_eq!(f.host.tap_item(&mut f.adapter, 15), Ok(false));

    assert_eq!(
        *clicks.borrow(),
        vec![("Item 3".to_string(), "Item 3".to_string(), 3)]
    );
}

#[test]
fn recycled_slots_are_reused_while_scrolling() {
    let mut f = linear_fixture(20, vec![]);
    for _ in 0..12 {
        f.host.scroll_by(&mut f.adapter, 1).unwrap();
    }
    // One slot per visible row; the footer is not a pooled item slot.
    assert!(f.host.slot_count() <= 8);
    assert_eq!(f.adapter.bound_slot_count(), f.host.visible_texts().len());
    assert_not_contains_text(&f.host.visible_texts(), "Item 0", "scrolled down");
}

#[test]
fn prepend_notifies_head_insert_without_touching_footer() {
    let mut f = linear_fixture(5, vec![]);
    f.host.take_updates();

    f.adapter.prepend_page(page(100..103));

    assert_updates(
        &f.host.take_updates(),
        &[ListUpdate::Inserted { start: 0, count: 3 }],
        "prepend",
    );
    assert_footer_state(&f.adapter, FooterState::Loading, "prepend");
    f.host.layout(&mut f.adapter).unwrap();
    assert_eq!(f.host.visible_texts()[0], "Item 100");
}

#[test]
fn detached_host_stops_receiving_updates() {
    let mut f = linear_fixture(5, vec![]);
    f.host.take_updates();
    assert_eq!(f.adapter.observer_count(), 1);
    f.host.detach(&mut f.adapter);
    assert_eq!(f.adapter.observer_count(), 0);

    f.adapter.append_page(page(5..7));

    assert!(f.host.take_updates().is_empty());
    assert_eq!(f.adapter.bound_slot_count(), 0);
}

#[test]
fn loader_answers_only_pending_requests() {
    let mut f = linear_fixture(20, vec![]);
    assert_eq!(f.adapter.item_layout(), pagelist_testing::TEXT_LAYOUT);
    f.loader.push(LoadResult::LastPage(page(20..22)));

    // Nothing was requested yet, so nothing is delivered.
    assert!(!f.loader.deliver(&mut f.adapter));

    f.host.scroll_to_end(&mut f.adapter).unwrap();
    assert_eq!(f.loader.pending(), 1);
    assert!(f.loader.deliver(&mut f.adapter));
    assert_eq!(f.loader.pending(), 0);
    assert_footer_state(&f.adapter, FooterState::End, "after last page");
    assert_eq!(f.adapter.row(21).map(String::as_str), Some("Item 21"));
}
