//! Paginated list adapter for virtualized list hosts.
//!
//! The adapter sits between a consumer's row data and a host that recycles
//! slots. It adds a single footer slot while pagination is enabled, shows a
//! loading, failed or end visual in it, and asks the consumer for the next
//! page when the host reports that the end of the list is visible.
//!
//! - [`ListAdapter`] - rows, slot kinds, mutations, click dispatch
//! - [`FooterController`] - footer visuals and the load request guard
//! - [`ScrollMonitor`] / [`LayoutGeometry`] - near-end detection per layout shape

pub mod adapter;
pub mod binder;
pub mod config;
pub mod error;
pub mod footer;
pub mod load;
pub mod observer;
pub mod scroll;
pub mod slot;

pub use adapter::{ItemClickCallback, ListAdapter, LoadMoreCallback};
pub use binder::{row_binder, FnRowBinder, RowBinder};
pub use config::PagingConfig;
pub use error::AdapterError;
pub use footer::{FooterContent, FooterController, FooterSlot, FooterState};
pub use load::LoadResult;
pub use observer::{ListUpdate, ObserverRegistry};
pub use scroll::{LaneIndexes, LayoutGeometry, ScrollEvent, ScrollMonitor, ScrollState, ScrollStats};
pub use slot::{LayoutId, Slot, SlotId, SlotKind, SpanPolicy};

pub mod prelude {
    pub use crate::adapter::ListAdapter;
    pub use crate::binder::{row_binder, RowBinder};
    pub use crate::config::PagingConfig;
    pub use crate::error::AdapterError;
    pub use crate::footer::FooterState;
    pub use crate::load::LoadResult;
    pub use crate::observer::ListUpdate;
    pub use crate::scroll::{LayoutGeometry, ScrollState};
    pub use crate::slot::{LayoutId, Slot, SlotId, SlotKind};
}
