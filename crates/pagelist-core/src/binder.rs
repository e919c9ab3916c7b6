//! Row rendering supplied by the consumer.

use crate::slot::LayoutId;

/// Populates item slots from rows.
///
/// The adapter never looks inside rows or slots; it only hands the binder
/// the row for each bound position.
pub trait RowBinder<T, S> {
    /// Template used for every item slot.
    fn layout_id(&self) -> LayoutId;

    /// Fills `slot` with the content of `row`.
    fn bind(&self, slot: &mut S, row: &T);
}

/// [`RowBinder`] backed by a closure. Create with [`row_binder`].
pub struct FnRowBinder<F> {
    layout_id: LayoutId,
    bind: F,
}

/// Wraps a closure as a [`RowBinder`] with a fixed layout.
///
/// ```rust,ignore
/// let binder = row_binder(LayoutId(1), |slot: &mut TextSlot, row: &Message| {
///     slot.set_text(&row.body);
/// });
/// ```
pub fn row_binder<F>(layout_id: LayoutId, bind: F) -> FnRowBinder<F> {
    FnRowBinder { layout_id, bind }
}

impl<T, S, F> RowBinder<T, S> for FnRowBinder<F>
where
    F: Fn(&mut S, &T),
{
    fn layout_id(&self) -> LayoutId {
        self.layout_id
    }

    fn bind(&self, slot: &mut S, row: &T) {
        (self.bind)(slot, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_binder_forwards_row() {
        let binder = row_binder(LayoutId(7), |slot: &mut String, row: &u32| {
            *slot = format!("row {row}");
        });
        let mut slot = String::new();
        binder.bind(&mut slot, &3);
        assert_eq!(slot, "row 3");
        assert_eq!(RowBinder::<u32, String>::layout_id(&binder), LayoutId(7));
    }
}
