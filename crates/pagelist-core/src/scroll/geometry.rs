//! Layout geometries reported by the host.
//!
//! The host reduces its concrete layout to one of three shapes. Everything
//! the monitor needs is derived from the last visible slot index, so each
//! shape collapses to a single comparison value.

use smallvec::SmallVec;

use crate::slot::SpanPolicy;

/// Last visible slot index per lane. Most staggered layouts use 2-4 lanes.
pub type LaneIndexes = SmallVec<[Option<usize>; 4]>;

/// The visible extent of the list as reported by the host.
///
/// `None` means no slot is visible (empty list, or not laid out yet).
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutGeometry {
    /// Single column (or row) list.
    Linear { last_visible: Option<usize> },
    /// Uniform grid. Reduced like a linear list; `span_count` is only used
    /// to give the footer a full row.
    Grid {
        span_count: usize,
        last_visible: Option<usize>,
    },
    /// Staggered layout with independent lanes.
    MultiLane { last_visible: LaneIndexes },
}

impl LayoutGeometry {
    pub fn linear(last_visible: impl Into<Option<usize>>) -> Self {
        LayoutGeometry::Linear {
            last_visible: last_visible.into(),
        }
    }

    pub fn grid(span_count: usize, last_visible: impl Into<Option<usize>>) -> Self {
        LayoutGeometry::Grid {
            span_count,
            last_visible: last_visible.into(),
        }
    }

    /// Builds a multi-lane geometry from each lane's last visible index.
    pub fn multi_lane<I>(lanes: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        LayoutGeometry::MultiLane {
            last_visible: lanes.into_iter().map(Some).collect(),
        }
    }

    /// The last visible slot: the maximum across lanes for multi-lane layouts.
    pub fn last_visible_index(&self) -> Option<usize> {
        match self {
            LayoutGeometry::Linear { last_visible } | LayoutGeometry::Grid { last_visible, .. } => {
                *last_visible
            }
            LayoutGeometry::MultiLane { last_visible } => {
                last_visible.iter().flatten().copied().max()
            }
        }
    }

    /// Whether the visible extent has reached the end of `item_count` slots.
    ///
    /// Fires when `last + 1 == item_count`, or up to `trigger_distance` slots
    /// earlier. Linear layouts also require `last > 0` and multi-lane
    /// layouts `item_count > 1`, so an empty or single-slot list never
    /// counts as scrolled to the end.
    pub fn is_near_end(&self, item_count: usize, trigger_distance: usize) -> bool {
        let Some(last) = self.last_visible_index() else {
            return false;
        };
        let above_minimum = match self {
            LayoutGeometry::Linear { .. } | LayoutGeometry::Grid { .. } => last > 0,
            LayoutGeometry::MultiLane { .. } => item_count > 1,
        };
        let Some(reached) = last.checked_add(1) else {
            return false;
        };
        above_minimum
            && reached <= item_count
            && reached.saturating_add(trigger_distance) >= item_count
    }

    /// Number of cells a slot with `policy` claims in this geometry.
    pub fn span_size(&self, policy: SpanPolicy) -> usize {
        match self {
            LayoutGeometry::Linear { .. } => 1,
            LayoutGeometry::Grid { span_count, .. } => policy.span_size(*span_count),
            LayoutGeometry::MultiLane { last_visible } => policy.span_size(last_visible.len()),
        }
    }

    /// Whether a slot with `policy` must span every lane.
    pub fn is_full_span(&self, policy: SpanPolicy) -> bool {
        !matches!(self, LayoutGeometry::Linear { .. }) && policy == SpanPolicy::FullRow
    }
}
