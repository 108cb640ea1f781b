//! Bounded least-recently-used cache of per-pair scores
//!
//! Keys are order-independent since every measure is symmetric. Recency is
//! tracked with a generation counter per entry; stale queue slots are skipped
//! on eviction and compacted when the queue outgrows the map.

use std::collections::{HashMap, VecDeque};

use parking_lot::Mutex;
use serde::Serialize;

use crate::taxonomy::SynsetIdx;

use super::{Algorithm, SynsetScore};

type Key = (SynsetIdx, SynsetIdx, Algorithm);

fn key(s1: SynsetIdx, s2: SynsetIdx, algorithm: Algorithm) -> Key {
    (s1.min(s2), s1.max(s2), algorithm)
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<Key, (SynsetScore, u64)>,
    order: VecDeque<(Key, u64)>,
    generation: u64,
    hits: u64,
    misses: u64,
}

impl Inner {
    fn touch(&mut self, key: Key) -> u64 {
        self.generation += 1;
        self.order.push_back((key, self.generation));
        self.generation
    }

    fn evict(&mut self, capacity: usize) {
        while self.entries.len() > capacity {
            let Some((key, generation)) = self.order.pop_front() else {
                break;
            };
            if self.entries.get(&key).is_some_and(|&(_, g)| g == generation) {
                self.entries.remove(&key);
            }
        }
        if self.order.len() > capacity.saturating_mul(2).max(16) {
            let entries = &self.entries;
            self.order.retain(|(key, generation)| {
                entries.get(key).is_some_and(|&(_, g)| g == *generation)
            });
        }
    }
}

/// Hit/miss counters of a [`ScoreCache`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Thread-safe score memo; a capacity of 0 disables it
#[derive(Debug)]
pub struct ScoreCache {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl ScoreCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            capacity,
        }
    }

    pub fn disabled() -> Self {
        Self::new(0)
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    pub fn get(&self, s1: SynsetIdx, s2: SynsetIdx, algorithm: Algorithm) -> Option<SynsetScore> {
        if !self.is_enabled() {
            return None;
        }
        let key = key(s1, s2, algorithm);
        let mut inner = self.inner.lock();
        let cached = inner.entries.get(&key).map(|&(score, _)| score);
        let Some(score) = cached else {
            inner.misses += 1;
            return None;
        };
        inner.hits += 1;
        let generation = inner.touch(key);
        if let Some(entry) = inner.entries.get_mut(&key) {
            entry.1 = generation;
        }
        inner.evict(self.capacity);
        Some(score)
    }

    pub fn insert(&self, s1: SynsetIdx, s2: SynsetIdx, algorithm: Algorithm, score: SynsetScore) {
        if !self.is_enabled() {
            return;
        }
        let key = key(s1, s2, algorithm);
        let mut inner = self.inner.lock();
        let generation = inner.touch(key);
        inner.entries.insert(key, (score, generation));
        inner.evict(self.capacity);
    }

    /// Cached score, computing and storing it on a miss
    pub fn get_or_insert_with(
        &self,
        s1: SynsetIdx,
        s2: SynsetIdx,
        algorithm: Algorithm,
        compute: impl FnOnce() -> SynsetScore,
    ) -> SynsetScore {
        if let Some(score) = self.get(s1, s2, algorithm) {
            return score;
        }
        let score = compute();
        self.insert(s1, s2, algorithm, score);
        score
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        CacheStats {
            entries: inner.entries.len(),
            capacity: self.capacity,
            hits: inner.hits,
            misses: inner.misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: f64) -> SynsetScore {
        SynsetScore::new(value, None)
    }

    #[test]
    fn test_keys_ignore_pair_order() {
        let cache = ScoreCache::new(8);
        cache.insert(SynsetIdx(1), SynsetIdx(2), Algorithm::Wup, score(0.5));

        assert_eq!(cache.get(SynsetIdx(2), SynsetIdx(1), Algorithm::Wup), Some(score(0.5)));
        assert_eq!(cache.get(SynsetIdx(1), SynsetIdx(2), Algorithm::Lin), None);
    }

    #[test]
    fn test_least_recently_used_is_evicted() {
        let cache = ScoreCache::new(2);
        cache.insert(SynsetIdx(0), SynsetIdx(1), Algorithm::Path, score(1.0));
        cache.insert(SynsetIdx(0), SynsetIdx(2), Algorithm::Path, score(2.0));
        // refresh the first entry so the second becomes the oldest
        assert!(cache.get(SynsetIdx(0), SynsetIdx(1), Algorithm::Path).is_some());
        cache.insert(SynsetIdx(0), SynsetIdx(3), Algorithm::Path, score(3.0));

        assert_eq!(cache.len(), 2);
        assert!(cache.get(SynsetIdx(0), SynsetIdx(1), Algorithm::Path).is_some());
        assert!(cache.get(SynsetIdx(0), SynsetIdx(2), Algorithm::Path).is_none());
        assert!(cache.get(SynsetIdx(0), SynsetIdx(3), Algorithm::Path).is_some());
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = ScoreCache::disabled();
        let mut calls = 0;
        for _ in 0..2 {
            cache.get_or_insert_with(SynsetIdx(0), SynsetIdx(1), Algorithm::Hso, || {
                calls += 1;
                score(13.0)
            });
        }
        assert_eq!(calls, 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_get_or_insert_with_computes_once() {
        let cache = ScoreCache::new(4);
        let mut calls = 0;
        for _ in 0..3 {
            let value = cache.get_or_insert_with(SynsetIdx(4), SynsetIdx(5), Algorithm::Res, || {
                calls += 1;
                score(0.7)
            });
            assert_eq!(value.value, 0.7);
        }
        assert_eq!(calls, 1);
        let stats = cache.stats();
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn test_queue_stays_bounded() {
        let cache = ScoreCache::new(2);
        cache.insert(SynsetIdx(0), SynsetIdx(1), Algorithm::Path, score(1.0));
        for _ in 0..100 {
            cache.get(SynsetIdx(0), SynsetIdx(1), Algorithm::Path);
        }
        assert!(cache.inner.lock().order.len() <= 17);
        cache.insert(SynsetIdx(0), SynsetIdx(2), Algorithm::Path, score(2.0));
        assert_eq!(cache.len(), 2);
    }
}
