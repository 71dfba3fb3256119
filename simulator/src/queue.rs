use std::collections::{vec_deque, VecDeque};
use std::fmt;

use schema::{Aircraft, HoldingPattern};

/// The holding pattern used by the simulator: aircraft ordered by fuel remaining
pub type HoldingQueue = PriorityQueue<Aircraft, i32>;

/// A queue kept in ascending order of a key extracted from each entry.
///
/// Only [`insert_ordered`](Self::insert_ordered) places entries by key; `push_back` and
/// `pop_front` are plain FIFO operations which leave the existing order alone, so that a
/// queue may be drained and rebuilt without comparing entries mid-pass.
#[derive(Clone)]
pub struct PriorityQueue<T, K: Ord> {
    entries: VecDeque<T>,
    key: fn(&T) -> K,
}

impl<T, K: Ord> PriorityQueue<T, K> {
    pub fn new(key: fn(&T) -> K) -> Self {
        Self {
            entries: VecDeque::new(),
            key,
        }
    }

    /// Inserts `entry` ahead of the first entry with a strictly greater key, so entries
    /// sharing a key keep the order they were inserted in
    pub fn insert_ordered(&mut self, entry: T) {
        let key_of = self.key;
        let key = key_of(&entry);
        let index = self
            .entries
            .iter()
            .position(|existing| key_of(existing) > key)
            .unwrap_or(self.entries.len());

        self.entries.insert(index, entry);
    }

    pub fn push_back(&mut self, entry: T) {
        self.entries.push_back(entry);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.entries.pop_front()
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<T: fmt::Debug, K: Ord> fmt::Debug for PriorityQueue<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

// Queues compare by their entries alone
impl<T: PartialEq, K: Ord> PartialEq for PriorityQueue<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq, K: Ord> Eq for PriorityQueue<T, K> {}

impl HoldingQueue {
    pub fn by_fuel() -> Self {
        Self::new(Aircraft::fuel_remaining)
    }
}

impl Default for HoldingQueue {
    fn default() -> Self {
        Self::by_fuel()
    }
}

impl HoldingPattern for HoldingQueue {
    type Waiting<'a> = vec_deque::Iter<'a, Aircraft>;

    fn waiting(&self) -> Self::Waiting<'_> {
        self.iter()
    }

    fn insert_ordered(&mut self, aircraft: Aircraft) {
        PriorityQueue::insert_ordered(self, aircraft);
    }

    fn push_back(&mut self, aircraft: Aircraft) {
        PriorityQueue::push_back(self, aircraft);
    }

    fn pop_front(&mut self) -> Option<Aircraft> {
        PriorityQueue::pop_front(self)
    }

    fn peek_front(&self) -> Option<&Aircraft> {
        PriorityQueue::peek_front(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn clear(&mut self) {
        PriorityQueue::clear(self);
    }
}
