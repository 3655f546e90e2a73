//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::{BTreeMap, HashMap};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Every touch stamps the key with the next value of a monotonic sequence
/// counter. Keys are indexed both ways:
/// - `sequences`: key -> its latest sequence
/// - `order`: sequence -> key, ascending (first = least recently used)
///
/// Sequences are unique, so two keys never share a position. A key that was
/// inserted and never accessed again keeps its insertion sequence, which makes
/// the oldest-inserted entry lose any tie.
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Latest sequence per key
    sequences: HashMap<String, u64>,
    /// Keys ordered by last access
    order: BTreeMap<u64, String>,
    /// Next sequence number to hand out
    next_sequence: u64,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Marks a key as most recently used and returns its new sequence.
    ///
    /// If the key is already tracked, its old position is dropped first.
    pub fn touch(&mut self, key: &str) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        match self.sequences.get_mut(key) {
            Some(previous) => {
                let stale = std::mem::replace(previous, sequence);
                if let Some(owned) = self.order.remove(&stale) {
                    self.order.insert(sequence, owned);
                }
            }
            None => {
                self.sequences.insert(key.to_string(), sequence);
                self.order.insert(sequence, key.to_string());
            }
        }

        sequence
    }

    // == Remove ==
    /// Removes a key from the tracker. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        if let Some(sequence) = self.sequences.remove(key) {
            self.order.remove(&sequence);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.sequences.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.values().next()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sequences.contains_key(key)
    }
}
