//! Bounded probability memo shared by the engines.
//!
//! Each engine keeps a small fixed-capacity cache of `(key) -> probability`
//! results. Capacity overflow drops the stalest entries; the exact eviction
//! order is not load-bearing, so this leans on `lru::LruCache`. The map sits
//! behind a `Mutex` so engines can be shared across threads while keeping
//! `&self` query methods.

use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;

pub struct BoundedCache<K: Hash + Eq, V: Copy> {
    entries: Mutex<LruCache<K, V>>,
}

impl<K: Hash + Eq, V: Copy> BoundedCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        BoundedCache {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).copied()
    }

    pub fn put(&self, key: K, value: V) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.put(key, value);
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_retrieves() {
        let cache: BoundedCache<(usize, usize), f64> = BoundedCache::new(4);
        assert_eq!(cache.get(&(1, 2)), None);
        cache.put((1, 2), 0.25);
        assert_eq!(cache.get(&(1, 2)), Some(0.25));
    }

    #[test]
    fn evicts_at_capacity() {
        let cache: BoundedCache<usize, f64> = BoundedCache::new(2);
        cache.put(1, 0.1);
        cache.put(2, 0.2);
        cache.put(3, 0.3);
        assert_eq!(cache.len(), 2);
        // The stalest entry went away, the newest survived.
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&3), Some(0.3));
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache: BoundedCache<usize, f64> = BoundedCache::new(8);
        cache.put(7, 0.7);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&7), None);
    }

    #[test]
    fn zero_capacity_is_coerced_to_one() {
        let cache: BoundedCache<usize, f64> = BoundedCache::new(0);
        cache.put(1, 0.5);
        assert_eq!(cache.get(&1), Some(0.5));
    }
}
