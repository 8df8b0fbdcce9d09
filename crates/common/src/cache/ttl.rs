//! Per-entry TTL cache implementation

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

use crate::time::{Clock, SystemClock};

/// Entry stored in the cache together with its absolute expiry
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Thread-safe cache where each entry expires independently
///
/// # Type Parameters
/// - `K`: Key type (must be `Eq + Hash + Clone`)
/// - `V`: Value type (must be `Clone`)
/// - `C`: Clock type for expiry checks (defaults to `SystemClock`)
#[derive(Debug)]
pub struct TtlCache<K, V, C = SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    clock: C,
}

impl<K, V> TtlCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create an empty cache backed by the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<K, V> Default for TtlCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> TtlCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    /// Create an empty cache with a custom clock (useful for testing)
    pub fn with_clock(clock: C) -> Self {
        Self { entries: RwLock::new(HashMap::new()), clock }
    }

    /// Get a value from the cache
    ///
    /// Returns `None` if the key is absent or its expiry has passed. Expired
    /// entries are removed as a side effect.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();

        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => return None,
                Some(entry) if now < entry.expires_at => return Some(entry.value.clone()),
                Some(_) => {}
            }
        }

        // Expired: re-check under the write lock, a concurrent `set` may have
        // refreshed the entry in between.
        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|entry| now >= entry.expires_at) {
            entries.remove(key);
            tracing::debug!("cache entry expired and was evicted");
            return None;
        }
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Insert or overwrite a value that expires `ttl` from now
    pub fn set(&self, key: K, value: V, ttl: Duration) {
        let expires_at = self.clock.now() + ttl;
        self.entries.write().insert(key, CacheEntry { value, expires_at });
    }

    /// Remove an entry, returning its value if it had not expired yet
    pub fn remove(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        self.entries
            .write()
            .remove(key)
            .filter(|entry| now < entry.expires_at)
            .map(|entry| entry.value)
    }

    /// Number of stored entries, including expired ones not yet read
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Access the clock driving expiry
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
