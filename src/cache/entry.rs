//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

// == Cache Entry ==
/// Represents a single cache entry with value and recency metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Access sequence number of the last get or put on this entry
    pub last_access: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the given access sequence.
    pub fn new(value: String, sequence: u64) -> Self {
        Self {
            value,
            last_access: sequence,
        }
    }

    // == Touch ==
    /// Records a new access on this entry.
    pub fn touch(&mut self, sequence: u64) {
        self.last_access = sequence;
    }
}
