//! Errors reported by the adapter to its host.
//!
//! Both variants are precondition violations: the host and the adapter
//! disagree about how many slots exist or what kind a slot is. They are not
//! recoverable by retrying the same call.

use crate::slot::SlotKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdapterError {
    /// The host asked for a slot past the end of the list.
    IndexOutOfRange { index: usize, count: usize },
    /// An item operation was invoked on the footer slot or vice versa.
    InvalidSlotKind {
        index: usize,
        expected: SlotKind,
        found: SlotKind,
    },
}

impl std::fmt::Display for AdapterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdapterError::IndexOutOfRange { index, count } => {
                write!(f, "slot index {index} out of range (item count {count})")
            }
            AdapterError::InvalidSlotKind {
                index,
                expected,
                found,
            } => write!(
                f,
                "slot {index} is {found:?}, expected {expected:?}; dispatch on slot_kind first"
            ),
        }
    }
}

impl std::error::Error for AdapterError {}
