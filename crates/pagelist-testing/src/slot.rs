//! Slots handed out by the simulated host.

use pagelist_core::{Slot, SlotId};

/// A recyclable slot that renders to a line of text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestSlot {
    id: u64,
    /// Text written by the row binder.
    pub text: String,
    /// How many times this slot has been bound.
    pub bind_count: usize,
}

impl TestSlot {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            text: String::new(),
            bind_count: 0,
        }
    }

    /// Writes the slot's text. Row binders call this.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.bind_count += 1;
    }
}

impl Slot for TestSlot {
    fn slot_id(&self) -> SlotId {
        SlotId(self.id)
    }
}
