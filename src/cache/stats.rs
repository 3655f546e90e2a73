//! Cache Statistics Module
//!
//! Counters describing how the store has been used since startup.

use std::fmt;

// == Cache Stats ==
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// GETs that found their key
    pub hits: u64,
    /// GETs for absent keys
    pub misses: u64,
    /// Entries dropped to stay within capacity
    pub evictions: u64,
    /// PUTs applied, inserts and overwrites alike
    pub puts: u64,
    /// INVALIDATEs that actually removed an entry
    pub invalidations: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no GET has been served.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_put(&mut self) {
        self.puts += 1;
    }

    pub fn record_invalidation(&mut self) {
        self.invalidations += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entries={} hits={} misses={} hit_rate={:.2} puts={} invalidations={} evictions={}",
            self.total_entries,
            self.hits,
            self.misses,
            self.hit_rate(),
            self.puts,
            self.invalidations,
            self.evictions
        )
    }
}
