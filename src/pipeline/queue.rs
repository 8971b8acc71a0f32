//! Shared pool of pending jobs.

use parking_lot::Mutex;

/// A mutex-guarded stack of pending work items.
///
/// Filled once before workers start and drained to empty; each item is
/// handed to exactly one caller of [`pop`](WorkQueue::pop). Delivery order is
/// last-in, first-out.
#[derive(Debug)]
pub struct WorkQueue<T> {
    items: Mutex<Vec<T>>,
}

impl<T> WorkQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    /// Add one item.
    pub fn push(&self, item: T) {
        self.items.lock().push(item);
    }

    /// Remove and return one item, or `None` once the queue is empty.
    ///
    /// The lock is released before returning.
    pub fn pop(&self) -> Option<T> {
        self.items.lock().pop()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for WorkQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: Mutex::new(iter.into_iter().collect()),
        }
    }
}
