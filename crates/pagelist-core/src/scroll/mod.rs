//! Near-end detection.
//!
//! The host reports two kinds of events: scrolling came to rest, and the
//! position moved while still scrolling. Both go through the same check, so
//! the end is detected whether the user flings past it or creeps up to it.
//! A detected end only becomes a load-more request if the footer lets the
//! request be claimed.

mod geometry;

pub use geometry::{LaneIndexes, LayoutGeometry};

use crate::footer::FooterController;

/// Scroll state transitions reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollState {
    Idle,
    Dragging,
    Settling,
}

/// Events evaluated by the monitor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollEvent {
    /// Scrolling stopped.
    Settled,
    /// Position changed by (`dx`, `dy`) while moving.
    Scrolled { dx: f32, dy: f32 },
}

impl ScrollEvent {
    /// Maps a state change to an event; only coming to rest is evaluated.
    pub fn from_state(state: ScrollState) -> Option<Self> {
        match state {
            ScrollState::Idle => Some(ScrollEvent::Settled),
            ScrollState::Dragging | ScrollState::Settling => None,
        }
    }
}

/// Diagnostic counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollStats {
    /// Events evaluated.
    pub events: usize,
    /// Events where the visible extent reached the end.
    pub near_end_hits: usize,
    /// Load-more requests issued.
    pub requests: usize,
    /// Near-end hits the footer did not let through.
    pub suppressed: usize,
}

/// Turns host scroll events into at most one load-more request per
/// `Loading` entry of the footer.
#[derive(Clone, Debug, Default)]
pub struct ScrollMonitor {
    trigger_distance: usize,
    stats: ScrollStats,
}

impl ScrollMonitor {
    pub fn new(trigger_distance: usize) -> Self {
        Self {
            trigger_distance,
            stats: ScrollStats::default(),
        }
    }

    #[inline]
    pub fn trigger_distance(&self) -> usize {
        self.trigger_distance
    }

    pub fn stats(&self) -> &ScrollStats {
        &self.stats
    }

    /// Evaluates one event. Returns true when a load-more request must be
    /// issued; the footer's request guard has already been claimed.
    pub fn observe<V>(
        &mut self,
        event: ScrollEvent,
        geometry: &LayoutGeometry,
        item_count: usize,
        footer: &mut FooterController<V>,
    ) -> bool {
        self.stats.events += 1;
        let near_end = geometry.is_near_end(item_count, self.trigger_distance);
        log::trace!(
            "scroll {:?}: last visible {:?} of {} -> near end {}",
            event,
            geometry.last_visible_index(),
            item_count,
            near_end
        );
        if !near_end {
            return false;
        }
        self.stats.near_end_hits += 1;

        if footer.claim_load_request() {
            self.stats.requests += 1;
            log::debug!("Near end of {item_count} slots; requesting more");
            true
        } else {
            self.stats.suppressed += 1;
            false
        }
    }
}
