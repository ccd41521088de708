use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Source of the current time for expiry checks
///
/// Injected so tests can advance time without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(delta) = chrono::Duration::from_std(by) {
            *self.now.lock() += delta;
        }
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// Size and TTL settings for a [`TtlCache`]
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub max_size: usize,
    pub default_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: 200,
            default_ttl: Duration::from_secs(5 * 60),
        }
    }
}

/// A stored value; replaced wholesale on `set`, never mutated
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    data: V,
    created_at: DateTime<Utc>,
    ttl: Duration,
    /// Insertion counter, breaks ties between equal `created_at` values
    seq: u64,
}

impl<V> CacheEntry<V> {
    fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.created_at).to_std().unwrap_or(Duration::ZERO)
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.age(now) > self.ttl
    }
}

/// Snapshot of one entry, for observability only
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntryStats {
    pub key: String,
    pub age_ms: u64,
    pub ttl_ms: u64,
    pub expired: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub size: usize,
    pub max_size: usize,
    pub entries: Vec<CacheEntryStats>,
}

struct CacheState<V> {
    entries: HashMap<String, CacheEntry<V>>,
    next_seq: u64,
}

impl<V> CacheState<V> {
    fn remove_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now));
        before - self.entries.len()
    }

    fn evict_oldest(&mut self, count: usize) -> usize {
        let mut by_age: Vec<(DateTime<Utc>, u64, String)> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry.created_at, entry.seq, key.clone()))
            .collect();
        by_age.sort();

        let mut removed = 0;
        for (_, _, key) in by_age.into_iter().take(count) {
            if self.entries.remove(&key).is_some() {
                removed += 1;
            }
        }
        removed
    }
}

/// Bounded in-process key/value cache with per-entry expiry
///
/// Expiry is lazy: entries are only checked on access or during `cleanup`.
/// Every operation holds a single lock for its whole duration, so the
/// size check, eviction and insert inside `set` happen atomically.
pub struct TtlCache<V> {
    state: Mutex<CacheState<V>>,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                next_seq: 0,
            }),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Stores a value, making room first if the cache is full
    ///
    /// Falls back to the configured default TTL when `ttl` is `None`.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let key = key.into();
        let now = self.clock.now();
        let mut state = self.state.lock();

        if !state.entries.contains_key(&key) && state.entries.len() >= self.config.max_size {
            self.cleanup_locked(&mut state, now);
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.entries.insert(
            key,
            CacheEntry {
                data: value,
                created_at: now,
                ttl: ttl.unwrap_or(self.config.default_ttl),
                seq,
            },
        );
    }

    /// Returns the value if present and fresh; expired entries are dropped
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();
        let mut guard = self.state.lock();
        let state = &mut *guard;

        match state.entries.get(key) {
            Some(entry) if !entry.is_expired(now) => Some(entry.data.clone()),
            Some(_) => {
                state.entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn has(&self, key: &str) -> bool {
        let now = self.clock.now();
        let mut guard = self.state.lock();
        let state = &mut *guard;

        match state.entries.get(key).map(|entry| entry.is_expired(now)) {
            Some(true) => {
                state.entries.remove(key);
                false
            }
            Some(false) => true,
            None => false,
        }
    }

    pub fn delete(&self, key: &str) -> bool {
        self.state.lock().entries.remove(key).is_some()
    }

    pub fn clear(&self) {
        self.state.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops expired entries, then the oldest quarter of capacity if still full
    ///
    /// Returns how many entries were removed in total.
    pub fn cleanup(&self) -> usize {
        let now = self.clock.now();
        let mut state = self.state.lock();
        self.cleanup_locked(&mut state, now)
    }

    fn cleanup_locked(&self, state: &mut CacheState<V>, now: DateTime<Utc>) -> usize {
        let expired = state.remove_expired(now);

        let mut evicted = 0;
        if state.entries.len() >= self.config.max_size {
            let quarter = (self.config.max_size / 4).max(1);
            evicted = state.evict_oldest(quarter);
        }

        if expired > 0 || evicted > 0 {
            tracing::debug!(
                expired = expired,
                evicted = evicted,
                remaining = state.entries.len(),
                "Cache cleanup"
            );
        }

        expired + evicted
    }

    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now();
        let state = self.state.lock();

        let mut entries: Vec<CacheEntryStats> = state
            .entries
            .iter()
            .map(|(key, entry)| CacheEntryStats {
                key: key.clone(),
                age_ms: entry.age(now).as_millis() as u64,
                ttl_ms: entry.ttl.as_millis() as u64,
                expired: entry.is_expired(now),
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        CacheStats {
            size: state.entries.len(),
            max_size: self.config.max_size,
            entries,
        }
    }
}
