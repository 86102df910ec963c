use dashmap::DashMap;
use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct CacheEntry<V> {
    pub value: V,
    /// `None` when the TTL reaches past what `Instant` can represent.
    pub expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    pub fn new(value: V, ttl: Duration, now: Instant) -> Self {
        Self {
            value,
            expires_at: now.checked_add(ttl),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Result of a diagnostic cache lookup. `TtlCache::get` folds `Expired` and
/// `Missing` into `None`.
#[derive(Debug, PartialEq, Eq)]
pub enum Lookup<V> {
    Fresh(V),
    Expired(V),
    Missing,
}

/// Key/value store with per-entry expiration, checked at read time.
///
/// Stale entries are never purged, only overwritten by the next `set`.
pub struct TtlCache<V> {
    entries: DashMap<String, CacheEntry<V>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    pub fn get_at(&self, key: &str, now: Instant) -> Option<V> {
        match self.lookup_at(key, now) {
            Lookup::Fresh(value) => Some(value),
            Lookup::Expired(_) | Lookup::Missing => None,
        }
    }

    pub fn lookup(&self, key: &str) -> Lookup<V> {
        self.lookup_at(key, Instant::now())
    }

    pub fn lookup_at(&self, key: &str, now: Instant) -> Lookup<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired_at(now) => Lookup::Expired(entry.value.clone()),
            Some(entry) => Lookup::Fresh(entry.value.clone()),
            None => Lookup::Missing,
        }
    }

    pub fn set(&self, key: &str, value: V, ttl: Duration) {
        self.set_at(key, value, ttl, Instant::now());
    }

    pub fn set_at(&self, key: &str, value: V, ttl: Duration, now: Instant) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, ttl, now));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
