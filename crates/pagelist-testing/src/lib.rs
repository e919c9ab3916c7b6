//! Testing utilities and a headless list host for pagelist

pub mod assertions;
pub mod host;
pub mod loader;
pub mod slot;

pub use host::{HostLayout, SimulatedHost, ROW_HEIGHT};
pub use loader::ScriptedLoader;
pub use slot::TestSlot;

use pagelist_core::{row_binder, FnRowBinder, LayoutId};

/// Layout id used by [`text_binder`].
pub const TEXT_LAYOUT: LayoutId = LayoutId(1);

/// A row binder that renders each row through `Display` into a [`TestSlot`].
pub fn text_binder<T: std::fmt::Display>() -> FnRowBinder<impl Fn(&mut TestSlot, &T)> {
    row_binder(TEXT_LAYOUT, |slot: &mut TestSlot, row: &T| {
        slot.set_text(row.to_string())
    })
}

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::host::{HostLayout, SimulatedHost};
    pub use crate::loader::ScriptedLoader;
    pub use crate::slot::TestSlot;
    pub use crate::text_binder;
}
