//! Integration tests for the TTL cache
//!
//! Covers per-entry expiry driven by a shared mock clock and concurrent
//! access from several threads.

#![cfg(feature = "runtime")]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use authing_common::cache::TtlCache;
use authing_common::time::MockClock;

/// Entries written with different TTLs expire independently of each other.
#[test]
fn test_entries_expire_independently() {
    let clock = MockClock::new();
    let cache: TtlCache<String, String, MockClock> = TtlCache::with_clock(clock.clone());

    cache.set("token:pool-a".to_string(), "a".to_string(), Duration::from_secs(30));
    cache.set("token:pool-b".to_string(), "b".to_string(), Duration::from_secs(120));

    clock.advance(Duration::from_secs(60));

    assert_eq!(cache.get(&"token:pool-a".to_string()), None);
    assert_eq!(cache.get(&"token:pool-b".to_string()), Some("b".to_string()));
    assert_eq!(cache.len(), 1);
}

/// A day-long TTL survives until the very last second and no longer.
#[test]
fn test_day_long_ttl_boundary() {
    let clock = MockClock::new();
    let cache: TtlCache<String, String, MockClock> = TtlCache::with_clock(clock.clone());
    let day = Duration::from_secs(24 * 60 * 60);

    cache.set("token:pool".to_string(), "tok".to_string(), day);

    clock.advance(day - Duration::from_secs(1));
    assert_eq!(cache.get(&"token:pool".to_string()), Some("tok".to_string()));

    clock.advance(Duration::from_secs(1));
    assert_eq!(cache.get(&"token:pool".to_string()), None);
}

/// Concurrent writers and readers never observe a torn state; the last
/// write per key wins.
#[test]
fn test_concurrent_access() {
    let cache: Arc<TtlCache<String, usize>> = Arc::new(TtlCache::new());
    let mut handles = vec![];

    for i in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for j in 0..100 {
                let key = format!("key{}", j % 10);
                cache.set(key.clone(), i * 1000 + j, Duration::from_secs(60));
                let _ = cache.get(&key);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 10);
    for j in 0..10 {
        assert!(cache.get(&format!("key{j}")).is_some());
    }
}
