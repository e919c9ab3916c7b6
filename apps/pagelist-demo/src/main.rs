//! Headless walkthrough: a message list that pages in from a background feed.
//!
//! The simulated host scrolls to the end, the adapter asks for more, the feed
//! thread answers over a channel and the event loop hands the result back
//! with `complete_load`. The second page fails once and is retried by
//! tapping the footer.

mod feed;

use std::time::Duration;

use anyhow::bail;
use pagelist_core::prelude::*;
use pagelist_testing::{text_binder, SimulatedHost, TestSlot};

use crate::feed::{describe, page_rows, Feed, FeedConfig, FeedRequest};

const MAX_STEPS: usize = 32;
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(2);

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== pagelist demo ===");
    println!("Scrolls a message list to the end until the feed runs out.");
    println!("Set RUST_LOG=debug to see footer transitions.");
    println!();

    let config = FeedConfig::default();
    let feed = Feed::spawn(config.clone());

    let mut adapter: ListAdapter<String, TestSlot, &'static str> = ListAdapter::new(
        page_rows(0, config.page_size),
        PagingConfig::paginated(),
        text_binder(),
    );
    adapter.set_loading_view(Some("[ loading... ]"));
    adapter.set_failed_view(Some("[ failed, tap to retry ]"));
    adapter.set_end_view(Some("[ no more messages ]"));

    let requester = feed.requester();
    adapter.set_on_load_more(move || {
        if requester.send(FeedRequest::NextPage).is_err() {
            log::warn!("feed is gone; dropping load-more request");
        }
    });
    adapter.set_on_item_click(|_: &TestSlot, row: &String, index| {
        log::info!("clicked {row} at {index}");
    });

    let mut host = SimulatedHost::linear(10);
    host.attach(&mut adapter)?;

    for step in 0..MAX_STEPS {
        match adapter.footer_state() {
            FooterState::End | FooterState::Absent => break,
            FooterState::Failed => {
                if !host.is_footer_visible() {
                    host.scroll_to_end(&mut adapter)?;
                }
                log::info!("step {step}: footer shows {:?}, tapping", host.rendered_footer());
                host.tap_footer(&mut adapter);
            }
            FooterState::Loading => {
                let requested = host.scroll_to_end(&mut adapter)?;
                log::info!(
                    "step {step}: at slot {} of {}, {requested} request(s)",
                    host.first_visible(),
                    adapter.item_count()
                );
            }
        }

        if !adapter.footer().request_outstanding() {
            continue;
        }
        let Some(response) = feed.recv_timeout(RESPONSE_TIMEOUT) else {
            bail!("feed did not answer within {RESPONSE_TIMEOUT:?}");
        };
        log::info!("page {}: {}", response.page, describe(&response.result));
        if response.result.is_terminal() {
            log::info!("feed exhausted after page {}", response.page);
        }
        adapter.complete_load(response.result);
        host.layout(&mut adapter)?;
    }

    host.layout(&mut adapter)?;
    log::info!(
        "finished with {} rows, footer {:?} showing {:?}",
        adapter.row_count(),
        adapter.footer_state(),
        host.rendered_footer()
    );
    for line in host.visible_texts() {
        println!("  {line}");
    }
    if let Some(footer) = host.rendered_footer() {
        println!("  {footer}");
    }

    host.scroll_to_top(&mut adapter)?;
    host.tap_item(&mut adapter, 0)?;

    let stats = adapter.scroll_stats();
    println!();
    println!(
        "scroll events: {}, near end: {}, requests: {}, suppressed: {}",
        stats.events, stats.near_end_hits, stats.requests, stats.suppressed
    );
    host.detach(&mut adapter);
    Ok(())
}
