//! Incremental update notifications for the host.
//!
//! The host must learn exactly which slots changed so in-flight animations
//! and the scroll position survive a page load. A full refresh is never sent.

use std::rc::Rc;

/// A structural or content change to the adapter's slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListUpdate {
    /// `count` slots were inserted starting at `start`.
    Inserted { start: usize, count: usize },
    /// `count` slots were removed starting at `start`.
    Removed { start: usize, count: usize },
    /// The slot at `index` must be re-rendered in place.
    Changed { index: usize },
}

/// Callbacks registered by hosts, keyed by a registration id.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<(u64, Rc<dyn Fn(&ListUpdate)>)>,
    next_id: u64,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `observer` and returns the id used to remove it.
    pub fn add(&mut self, observer: Rc<dyn Fn(&ListUpdate)>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.observers.push((id, observer));
        id
    }

    /// Removes a previously registered observer. Unknown ids are ignored.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers `update` to every observer in registration order.
    pub fn notify(&self, update: ListUpdate) {
        // Snapshot first so an observer may register or remove others.
        let observers: Vec<_> = self
            .observers
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            observer(&update);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_notify_reaches_all_observers_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();
        for tag in ["a", "b"] {
            let log = Rc::clone(&log);
            registry.add(Rc::new(move |update: &ListUpdate| {
                log.borrow_mut().push((tag, *update));
            }));
        }

        registry.notify(ListUpdate::Changed { index: 4 });

        assert_eq!(
            *log.borrow(),
            vec![
                ("a", ListUpdate::Changed { index: 4 }),
                ("b", ListUpdate::Changed { index: 4 }),
            ]
        );
    }

    #[test]
    fn test_removed_observer_is_not_notified() {
        let hits = Rc::new(RefCell::new(0));
        let mut registry = ObserverRegistry::new();
        let counter = Rc::clone(&hits);
        let id = registry.add(Rc::new(move |_: &ListUpdate| {
            *counter.borrow_mut() += 1;
        }));

        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        registry.notify(ListUpdate::Removed { start: 0, count: 1 });

        assert_eq!(*hits.borrow(), 0);
        assert!(registry.is_empty());
    }
}
