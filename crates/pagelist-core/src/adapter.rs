//! The list adapter.
//!
//! [`ListAdapter`] maps a sequence of rows onto host slots, appends the
//! pagination footer, and issues load-more requests when the host reports
//! that the end of the list is visible.
//!
//! Everything runs on the host's event thread. Load-more callbacks must not
//! block: the consumer starts the work elsewhere and later hands the outcome
//! back through [`ListAdapter::complete_load`] (or the individual mutation
//! and transition methods) on the same thread.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut adapter = ListAdapter::new(first_page, PagingConfig::paginated(), binder);
//! adapter.set_loading_view(Some(spinner));
//! adapter.set_failed_view(Some(retry_banner));
//! adapter.set_end_view(Some(end_banner));
//! adapter.set_on_load_more(move || requests.send(NextPage).ok().map(drop).unwrap_or(()));
//!
//! // host side
//! adapter.on_scrolled(0.0, dy, &LayoutGeometry::linear(last_visible));
//! ```

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::binder::RowBinder;
use crate::config::PagingConfig;
use crate::error::AdapterError;
use crate::footer::{FooterController, FooterState};
use crate::load::LoadResult;
use crate::observer::{ListUpdate, ObserverRegistry};
use crate::scroll::{LayoutGeometry, ScrollEvent, ScrollMonitor, ScrollState, ScrollStats};
use crate::slot::{LayoutId, Slot, SlotId, SlotKind, SpanPolicy};

/// Called with `(slot, row, index)` when a bound item slot is clicked.
pub type ItemClickCallback<T, S> = Box<dyn FnMut(&S, &T, usize)>;

/// Called when the next page should be requested.
pub type LoadMoreCallback = Box<dyn FnMut()>;

/// Adapter between a row sequence and a virtualized list host.
///
/// * `T` - row type
/// * `S` - host slot type
/// * `V` - host view handle used for the footer visuals
pub struct ListAdapter<T, S, V> {
    rows: Vec<T>,
    binder: Box<dyn RowBinder<T, S>>,
    footer: FooterController<V>,
    monitor: ScrollMonitor,
    /// Slot id -> index captured when the slot was last bound.
    click_bindings: FxHashMap<SlotId, usize>,
    on_item_click: Option<ItemClickCallback<T, S>>,
    on_load_more: Option<LoadMoreCallback>,
    observers: ObserverRegistry,
}

impl<T, S, V> ListAdapter<T, S, V> {
    /// Creates an adapter over `rows`.
    ///
    /// With pagination enabled the footer starts in `Loading`; it shows
    /// nothing until a loading view is supplied.
    pub fn new(
        rows: Vec<T>,
        config: PagingConfig,
        binder: impl RowBinder<T, S> + 'static,
    ) -> Self {
        Self {
            rows,
            binder: Box::new(binder),
            footer: FooterController::new(config.pagination_enabled),
            monitor: ScrollMonitor::new(config.trigger_distance),
            click_bindings: FxHashMap::default(),
            on_item_click: None,
            on_load_more: None,
            observers: ObserverRegistry::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Host queries
    // ─────────────────────────────────────────────────────────────────────

    /// Rows plus the footer slot when pagination is enabled.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.rows.len() + self.footer_count()
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 1 while pagination is enabled, otherwise 0.
    #[inline]
    pub fn footer_count(&self) -> usize {
        usize::from(self.footer.is_present())
    }

    #[inline]
    pub fn pagination_enabled(&self) -> bool {
        self.footer.is_present()
    }

    /// Index of the footer slot, always directly after the last row.
    pub fn footer_index(&self) -> Option<usize> {
        self.footer.is_present().then_some(self.rows.len())
    }

    pub fn is_footer(&self, index: usize) -> bool {
        self.footer_index() == Some(index)
    }

    /// Kind of the slot at `index`.
    pub fn slot_kind(&self, index: usize) -> Result<SlotKind, AdapterError> {
        let count = self.item_count();
        if index >= count {
            return Err(AdapterError::IndexOutOfRange { index, count });
        }
        Ok(if index < self.rows.len() {
            SlotKind::Item
        } else {
            SlotKind::Footer
        })
    }

    /// Template for item slots.
    pub fn item_layout(&self) -> LayoutId {
        self.binder.layout_id()
    }

    /// Span policy of the slot at `index`; only the footer spans.
    pub fn span_policy(&self, index: usize) -> Result<SpanPolicy, AdapterError> {
        Ok(match self.slot_kind(index)? {
            SlotKind::Item => SpanPolicy::SingleCell,
            SlotKind::Footer => SpanPolicy::FullRow,
        })
    }

    /// Span size override for grid geometries: the footer claims a full row.
    pub fn span_size(
        &self,
        index: usize,
        geometry: &LayoutGeometry,
    ) -> Result<usize, AdapterError> {
        Ok(geometry.span_size(self.span_policy(index)?))
    }

    /// Full-span override for multi-lane geometries.
    pub fn is_full_span(
        &self,
        index: usize,
        geometry: &LayoutGeometry,
    ) -> Result<bool, AdapterError> {
        Ok(geometry.is_full_span(self.span_policy(index)?))
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    pub fn footer(&self) -> &FooterController<V> {
        &self.footer
    }

    #[inline]
    pub fn footer_state(&self) -> FooterState {
        self.footer.state()
    }

    pub fn scroll_stats(&self) -> &ScrollStats {
        self.monitor.stats()
    }

    /// Number of slots that currently carry a click binding.
    pub fn bound_slot_count(&self) -> usize {
        self.click_bindings.len()
    }

    /// Returns the footer view to render at `index`.
    pub fn bind_footer(&self, index: usize) -> Result<Option<&V>, AdapterError> {
        match self.slot_kind(index)? {
            SlotKind::Footer => Ok(self.footer.current_view()),
            found => Err(AdapterError::InvalidSlotKind {
                index,
                expected: SlotKind::Footer,
                found,
            }),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Consumer callbacks and observers
    // ─────────────────────────────────────────────────────────────────────

    pub fn set_on_item_click(&mut self, callback: impl FnMut(&S, &T, usize) + 'static) {
        self.on_item_click = Some(Box::new(callback));
    }

    /// Sets the load-more callback. Without one the near-end trigger is off.
    pub fn set_on_load_more(&mut self, callback: impl FnMut() + 'static) {
        self.on_load_more = Some(Box::new(callback));
    }

    /// Registers a host observer for incremental updates.
    pub fn add_observer(&mut self, observer: Rc<dyn Fn(&ListUpdate)>) -> u64 {
        self.observers.add(observer)
    }

    pub fn remove_observer(&mut self, id: u64) -> bool {
        self.observers.remove(id)
    }

    #[inline]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a page at the tail and re-arms the footer.
    ///
    /// The host is told that `[old_count, old_count + len)` were inserted.
    /// An empty page changes nothing and notifies nothing.
    pub fn append_page(&mut self, rows: Vec<T>) {
        if rows.is_empty() {
            return;
        }
        let start = self.rows.len();
        let count = rows.len();
        self.rows.extend(rows);
        log::debug!("Appended {count} rows at {start}");
        self.observers.notify(ListUpdate::Inserted { start, count });
        self.footer.page_loaded();
    }

    /// Inserts a page at the head, shifting existing rows by its length.
    pub fn prepend_page(&mut self, rows: Vec<T>) {
        if rows.is_empty() {
            return;
        }
        let count = rows.len();
        self.rows.splice(0..0, rows);
        log::debug!("Prepended {count} rows");
        self.observers
            .notify(ListUpdate::Inserted { start: 0, count });
    }

    /// Applies the outcome of a load-more request.
    pub fn complete_load(&mut self, result: LoadResult<T>) {
        match result {
            LoadResult::Page(rows) => {
                if rows.is_empty() {
                    self.update_footer(FooterController::page_loaded);
                } else {
                    self.append_page(rows);
                }
            }
            LoadResult::LastPage(rows) => {
                self.append_page(rows);
                self.end_of_data();
            }
            LoadResult::Failed(reason) => {
                log::debug!("Load-more failed: {reason}");
                self.load_failed();
            }
            LoadResult::EndOfData => {
                self.end_of_data();
            }
        }
    }

    /// Reports a failed load: `Loading → Failed`.
    pub fn load_failed(&mut self) -> bool {
        self.update_footer(FooterController::load_failed)
    }

    /// Reports that no more data exists: `Loading | Failed → End`.
    pub fn end_of_data(&mut self) -> bool {
        self.update_footer(FooterController::end_of_data)
    }

    /// Re-arms an ended list: `End → Loading`.
    pub fn rearm(&mut self) -> bool {
        self.update_footer(FooterController::rearm)
    }

    pub fn set_loading_view(&mut self, view: Option<V>) -> bool {
        self.update_footer(|footer| footer.set_loading_view(view))
    }

    pub fn set_failed_view(&mut self, view: Option<V>) -> bool {
        self.update_footer(|footer| footer.set_failed_view(view))
    }

    pub fn set_end_view(&mut self, view: Option<V>) -> bool {
        self.update_footer(|footer| footer.set_end_view(view))
    }

    /// Adds or removes the footer slot after construction.
    ///
    /// Enabling enters `Loading`; the trigger still needs a loading view and
    /// a load-more callback to fire.
    pub fn set_pagination_enabled(&mut self, enabled: bool) {
        let index = self.rows.len();
        if enabled {
            if self.footer.enable() {
                self.observers
                    .notify(ListUpdate::Inserted { start: index, count: 1 });
            }
        } else if self.footer.disable() {
            self.observers
                .notify(ListUpdate::Removed { start: index, count: 1 });
        }
    }

    /// Tap on the footer slot. Retries when the failed view is shown.
    ///
    /// Returns whether a load-more request was issued.
    pub fn tap_footer(&mut self) -> bool {
        if self.on_load_more.is_none() {
            log::debug!("Ignoring footer tap: no load-more callback is set");
            return false;
        }
        if !self.update_footer(FooterController::tap) {
            return false;
        }
        log::debug!("Retrying load-more from failed footer");
        self.request_more();
        true
    }

    // ─────────────────────────────────────────────────────────────────────
    // Scroll events
    // ─────────────────────────────────────────────────────────────────────

    /// Host scroll state changed. Only coming to rest is evaluated.
    pub fn on_scroll_state_changed(&mut self, state: ScrollState, geometry: &LayoutGeometry) -> bool {
        match ScrollEvent::from_state(state) {
            Some(event) => self.handle_scroll(event, geometry),
            None => false,
        }
    }

    /// Host position changed while scrolling.
    pub fn on_scrolled(&mut self, dx: f32, dy: f32, geometry: &LayoutGeometry) -> bool {
        self.handle_scroll(ScrollEvent::Scrolled { dx, dy }, geometry)
    }

    /// Evaluates a scroll event; returns whether load-more was requested.
    pub fn handle_scroll(&mut self, event: ScrollEvent, geometry: &LayoutGeometry) -> bool {
        if !self.footer.is_present() || self.on_load_more.is_none() {
            return false;
        }
        let item_count = self.item_count();
        if self
            .monitor
            .observe(event, geometry, item_count, &mut self.footer)
        {
            self.request_more();
            true
        } else {
            false
        }
    }

    fn request_more(&mut self) {
        match self.on_load_more.as_mut() {
            Some(callback) => callback(),
            None => log::warn!("Load-more requested but no callback is set"),
        }
    }

    /// Runs a footer transition and tells the host to re-render the footer
    /// slot if its content was swapped.
    fn update_footer(&mut self, f: impl FnOnce(&mut FooterController<V>) -> bool) -> bool {
        let generation = self.footer.generation();
        let applied = f(&mut self.footer);
        if self.footer.generation() != generation {
            if let Some(index) = self.footer_index() {
                self.observers.notify(ListUpdate::Changed { index });
            }
        }
        applied
    }
}

impl<T, S: Slot, V> ListAdapter<T, S, V> {
    /// Renders the row at `index` into `slot` and (re)binds the slot's click.
    ///
    /// The binding captures `index` as it is now. If rows are inserted
    /// before the slot is rebound, a click reports the captured position.
    pub fn bind_item(&mut self, index: usize, slot: &mut S) -> Result<(), AdapterError> {
        match self.slot_kind(index)? {
            SlotKind::Item => {}
            found => {
                return Err(AdapterError::InvalidSlotKind {
                    index,
                    expected: SlotKind::Item,
                    found,
                })
            }
        }
        self.binder.bind(slot, &self.rows[index]);
        self.click_bindings.insert(slot.slot_id(), index);
        Ok(())
    }

    /// Drops the click binding of a slot the host has recycled.
    pub fn recycle(&mut self, slot: &S) -> bool {
        self.click_bindings.remove(&slot.slot_id()).is_some()
    }

    /// Dispatches a click on a bound item slot.
    ///
    /// Returns `Ok(false)` when the slot is not bound or no click callback is
    /// set, and `IndexOutOfRange` when the captured index no longer names a row.
    pub fn click_item(&mut self, slot: &S) -> Result<bool, AdapterError> {
        let Some(&index) = self.click_bindings.get(&slot.slot_id()) else {
            return Ok(false);
        };
        let count = self.item_count();
        let row = self
            .rows
            .get(index)
            .ok_or(AdapterError::IndexOutOfRange { index, count })?;
        match self.on_item_click.as_mut() {
            Some(callback) => {
                callback(slot, row, index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<T: std::fmt::Debug, S, V: std::fmt::Debug> std::fmt::Debug for ListAdapter<T, S, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListAdapter")
            .field("rows", &self.rows)
            .field("footer", &self.footer)
            .field("monitor", &self.monitor)
            .field("bound_slots", &self.click_bindings.len())
            .field("observers", &self.observer_count())
            .finish()
    }
}
