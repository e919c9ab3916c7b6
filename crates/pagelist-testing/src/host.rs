//! A headless virtualized list host.
//!
//! [`SimulatedHost`] plays the part of the platform list widget: it keeps a
//! scroll position, recycles [`TestSlot`]s, binds whatever is visible, and
//! reports scroll events and the matching [`LayoutGeometry`] to the adapter.
//! Every slot is one row tall; grids and staggered layouts place
//! `span_count`/`lanes` slots per row, and the footer spans the full row.
//!
//! ```rust,ignore
//! let mut host = SimulatedHost::linear(8);
//! host.attach(&mut adapter)?;
//! let requested = host.scroll_to_end(&mut adapter)?;
//! ```

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use pagelist_core::{
    AdapterError, LaneIndexes, LayoutGeometry, ListAdapter, ListUpdate, ScrollState, SlotKind,
};

use crate::slot::TestSlot;

/// Pixel height of one row, used for the `dy` reported with scroll events.
pub const ROW_HEIGHT: f32 = 48.0;

/// Layout shape of the simulated host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostLayout {
    Linear,
    Grid { span_count: usize },
    Staggered { lanes: usize },
}

pub struct SimulatedHost<V> {
    layout: HostLayout,
    /// Rows that fit in the viewport.
    viewport_rows: usize,
    first_visible: usize,
    next_slot_id: u64,
    /// Bound item slots with the index they were bound to.
    attached: Vec<(usize, TestSlot)>,
    pool: Vec<TestSlot>,
    rendered_footer: Option<V>,
    footer_visible: bool,
    updates: Rc<RefCell<Vec<ListUpdate>>>,
    observer_id: Option<u64>,
}

impl<V: Clone> SimulatedHost<V> {
    pub fn new(layout: HostLayout, viewport_rows: usize) -> Self {
        Self {
            layout,
            viewport_rows: viewport_rows.max(1),
            first_visible: 0,
            next_slot_id: 0,
            attached: Vec::new(),
            pool: Vec::new(),
            rendered_footer: None,
            footer_visible: false,
            updates: Rc::new(RefCell::new(Vec::new())),
            observer_id: None,
        }
    }

    pub fn linear(viewport_rows: usize) -> Self {
        Self::new(HostLayout::Linear, viewport_rows)
    }

    pub fn grid(span_count: usize, viewport_rows: usize) -> Self {
        Self::new(HostLayout::Grid { span_count }, viewport_rows)
    }

    pub fn staggered(lanes: usize, viewport_rows: usize) -> Self {
        Self::new(HostLayout::Staggered { lanes }, viewport_rows)
    }

    fn cells_per_row(&self) -> usize {
        match self.layout {
            HostLayout::Linear => 1,
            HostLayout::Grid { span_count } => span_count.max(1),
            HostLayout::Staggered { lanes } => lanes.max(1),
        }
    }

    /// Number of slots visible at once.
    pub fn capacity(&self) -> usize {
        self.viewport_rows * self.cells_per_row()
    }

    #[inline]
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    fn max_first(&self, item_count: usize) -> usize {
        item_count.saturating_sub(self.capacity())
    }

    /// Slots currently inside the viewport.
    pub fn visible_range(&self, item_count: usize) -> Range<usize> {
        let start = self.first_visible.min(item_count);
        start..(start + self.capacity()).min(item_count)
    }

    /// Registers for adapter updates and performs the first layout pass.
    pub fn attach<T>(
        &mut self,
        adapter: &mut ListAdapter<T, TestSlot, V>,
    ) -> Result<(), AdapterError> {
        if self.observer_id.is_none() {
            let sink = Rc::clone(&self.updates);
            let id = adapter.add_observer(Rc::new(move |update: &ListUpdate| {
                sink.borrow_mut().push(*update);
            }));
            self.observer_id = Some(id);
        }
        self.layout(adapter)
    }

    /// Unregisters from the adapter and recycles every slot.
    pub fn detach<T>(&mut self, adapter: &mut ListAdapter<T, TestSlot, V>) {
        if let Some(id) = self.observer_id.take() {
            adapter.remove_observer(id);
        }
        self.recycle_all(adapter);
        self.rendered_footer = None;
        self.footer_visible = false;
    }

    fn recycle_all<T>(&mut self, adapter: &mut ListAdapter<T, TestSlot, V>) {
        for (_, slot) in self.attached.drain(..) {
            adapter.recycle(&slot);
            self.pool.push(slot);
        }
    }

    /// Rebinds everything inside the viewport.
    pub fn layout<T>(
        &mut self,
        adapter: &mut ListAdapter<T, TestSlot, V>,
    ) -> Result<(), AdapterError> {
        let item_count = adapter.item_count();
        self.first_visible = self.first_visible.min(self.max_first(item_count));
        self.recycle_all(adapter);
        self.rendered_footer = None;
        self.footer_visible = false;

        for index in self.visible_range(item_count) {
            match adapter.slot_kind(index)? {
                SlotKind::Item => {
                    let mut slot = match self.pool.pop() {
                        Some(slot) => slot,
                        None => {
                            self.next_slot_id += 1;
                            TestSlot::new(self.next_slot_id)
                        }
                    };
                    adapter.bind_item(index, &mut slot)?;
                    self.attached.push((index, slot));
                }
                SlotKind::Footer => {
                    self.rendered_footer = adapter.bind_footer(index)?.cloned();
                    self.footer_visible = true;
                }
            }
        }
        log::trace!(
            "host layout: {:?} of {} slots, {} bound",
            self.visible_range(item_count),
            item_count,
            self.attached.len()
        );
        Ok(())
    }

    /// The geometry the host would report for its current position.
    pub fn geometry<T>(&self, adapter: &ListAdapter<T, TestSlot, V>) -> LayoutGeometry {
        let range = self.visible_range(adapter.item_count());
        let last = range.end.checked_sub(1).filter(|_| !range.is_empty());
        match self.layout {
            HostLayout::Linear => LayoutGeometry::linear(last),
            HostLayout::Grid { span_count } => LayoutGeometry::grid(span_count, last),
            HostLayout::Staggered { lanes } => {
                let mut last_visible = LaneIndexes::from_elem(None, lanes.max(1));
                for index in range {
                    if adapter.is_footer(index) {
                        last_visible.iter_mut().for_each(|lane| *lane = Some(index));
                    } else {
                        last_visible[index % lanes.max(1)] = Some(index);
                    }
                }
                LayoutGeometry::MultiLane { last_visible }
            }
        }
    }

    /// Scrolls by `delta` slots. Returns whether load-more was requested.
    ///
    /// Nothing is reported when the position does not change.
    pub fn scroll_by<T>(
        &mut self,
        adapter: &mut ListAdapter<T, TestSlot, V>,
        delta: isize,
    ) -> Result<bool, AdapterError> {
        let max_first = self.max_first(adapter.item_count());
        let target = self
            .first_visible
            .saturating_add_signed(delta)
            .min(max_first);
        if target == self.first_visible {
            return Ok(false);
        }
        let dy = (target as f32 - self.first_visible as f32) * ROW_HEIGHT
            / self.cells_per_row() as f32;
        self.first_visible = target;
        self.layout(adapter)?;
        let geometry = self.geometry(adapter);
        Ok(adapter.on_scrolled(0.0, dy, &geometry))
    }

    /// Reports that scrolling came to rest.
    pub fn settle<T>(
        &mut self,
        adapter: &mut ListAdapter<T, TestSlot, V>,
    ) -> Result<bool, AdapterError> {
        self.layout(adapter)?;
        let geometry = self.geometry(adapter);
        Ok(adapter.on_scroll_state_changed(ScrollState::Idle, &geometry))
    }

    /// Flings to the end and settles. Returns how many load-more requests
    /// the gesture produced.
    pub fn scroll_to_end<T>(
        &mut self,
        adapter: &mut ListAdapter<T, TestSlot, V>,
    ) -> Result<usize, AdapterError> {
        let mut requested = 0;
        let delta = self
            .max_first(adapter.item_count())
            .saturating_sub(self.first_visible);
        if delta > 0 && self.scroll_by(adapter, delta as isize)? {
            requested += 1;
        }
        if self.settle(adapter)? {
            requested += 1;
        }
        Ok(requested)
    }

    pub fn scroll_to_top<T>(
        &mut self,
        adapter: &mut ListAdapter<T, TestSlot, V>,
    ) -> Result<bool, AdapterError> {
        self.scroll_by(adapter, -(self.first_visible as isize))
    }

    /// Clicks the item slot bound at `index`, if it is visible.
    pub fn tap_item<T>(
        &mut self,
        adapter: &mut ListAdapter<T, TestSlot, V>,
        index: usize,
    ) -> Result<bool, AdapterError> {
        match self.attached.iter().find(|(bound, _)| *bound == index) {
            Some((_, slot)) => adapter.click_item(slot),
            None => Ok(false),
        }
    }

    /// Taps the footer, if it is visible. Returns whether a retry was issued.
    pub fn tap_footer<T>(&mut self, adapter: &mut ListAdapter<T, TestSlot, V>) -> bool {
        self.footer_visible && adapter.tap_footer()
    }

    /// Texts of the visible item slots, top to bottom.
    pub fn visible_texts(&self) -> Vec<String> {
        self.attached
            .iter()
            .map(|(_, slot)| slot.text.clone())
            .collect()
    }

    /// The footer view rendered by the last layout pass.
    pub fn rendered_footer(&self) -> Option<&V> {
        self.rendered_footer.as_ref()
    }

    #[inline]
    pub fn is_footer_visible(&self) -> bool {
        self.footer_visible
    }

    /// Slots created so far, bound or pooled.
    pub fn slot_count(&self) -> usize {
        self.attached.len() + self.pool.len()
    }

    /// Drains the updates received from the adapter since the last call.
    pub fn take_updates(&self) -> Vec<ListUpdate> {
        std::mem::take(&mut *self.updates.borrow_mut())
    }
}
