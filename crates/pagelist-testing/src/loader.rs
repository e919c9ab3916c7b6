//! Scripted consumer for load-more requests.
//!
//! The adapter's load-more callback only records that a request was made.
//! Tests then decide when the "network" answers by calling
//! [`ScriptedLoader::deliver`], which hands the next scripted outcome back
//! to the adapter, the same way a real consumer marshals a result onto the
//! event thread.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use pagelist_core::{ListAdapter, LoadResult};

pub struct ScriptedLoader<T> {
    requests: Rc<Cell<usize>>,
    delivered: usize,
    script: VecDeque<LoadResult<T>>,
}

impl<T> ScriptedLoader<T> {
    pub fn new(script: impl IntoIterator<Item = LoadResult<T>>) -> Self {
        Self {
            requests: Rc::new(Cell::new(0)),
            delivered: 0,
            script: script.into_iter().collect(),
        }
    }

    /// Installs the request-counting load-more callback on `adapter`.
    pub fn install<S, V>(&self, adapter: &mut ListAdapter<T, S, V>) {
        let requests = Rc::clone(&self.requests);
        adapter.set_on_load_more(move || requests.set(requests.get() + 1));
    }

    /// Appends another outcome to the script.
    pub fn push(&mut self, result: LoadResult<T>) {
        self.script.push_back(result);
    }

    /// Load-more requests received so far.
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    /// Requests not yet answered.
    pub fn pending(&self) -> usize {
        self.requests().saturating_sub(self.delivered)
    }

    /// Answers the oldest pending request with the next scripted outcome.
    ///
    /// Returns false when nothing is pending or the script is exhausted.
    pub fn deliver<S, V>(&mut self, adapter: &mut ListAdapter<T, S, V>) -> bool {
        if self.pending() == 0 {
            return false;
        }
        let Some(result) = self.script.pop_front() else {
            log::warn!("ScriptedLoader has no outcome left for a pending request");
            return false;
        };
        self.delivered += 1;
        adapter.complete_load(result);
        true
    }
}
