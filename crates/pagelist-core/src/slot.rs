//! Slot identity and classification.
//!
//! A slot is one renderable position in the virtualized list. The host owns
//! the slot objects (and recycles them); the adapter only needs a stable
//! identity to attach click bindings to.

/// Stable identity of a host slot.
///
/// Hosts recycle slots, so the same id is bound to many different rows over
/// its lifetime. The adapter keys at most one click binding per id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u64);

/// A renderable slot handed to the adapter by the host.
pub trait Slot {
    fn slot_id(&self) -> SlotId;
}

/// What a slot position holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Backed by a row of the data sequence.
    Item,
    /// The singleton pagination footer, always last when present.
    Footer,
}

/// Identifier of the visual template used for item slots.
///
/// Only a single uniform template is supported; hosts use it to pick which
/// slot pool to recycle from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutId(pub u32);

/// How many cells the slot claims in a multi-column geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpanPolicy {
    SingleCell,
    /// Spans every column/lane so the footer does not break the grid.
    FullRow,
}

impl SpanPolicy {
    /// Resolves the policy to a span size for a grid with `span_count` columns.
    #[inline]
    pub fn span_size(self, span_count: usize) -> usize {
        match self {
            SpanPolicy::SingleCell => 1,
            SpanPolicy::FullRow => span_count.max(1),
        }
    }
}
