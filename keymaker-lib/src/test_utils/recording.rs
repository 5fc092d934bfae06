//! Delegate that remembers every key it was handed.

use crate::{Key, Keymaker, Keymaking};
use std::cell::RefCell;

/// A [`Keymaking`] delegate that records each delivery in order.
#[derive(Debug, Default)]
pub struct RecordingDelegate {
    received: RefCell<Vec<Key>>,
}

impl RecordingDelegate {
    /// Creates a recorder that has received nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys received so far, oldest first.
    pub fn received(&self) -> Vec<Key> {
        self.received.borrow().clone()
    }

    /// Number of notifications received.
    pub fn count(&self) -> usize {
        self.received.borrow().len()
    }

    pub fn last(&self) -> Option<Key> {
        self.received.borrow().last().cloned()
    }
}

impl Keymaking for RecordingDelegate {
    fn on_key_produced(&self, _producer: &Keymaker, key: Key) {
        self.received.borrow_mut().push(key);
    }
}
