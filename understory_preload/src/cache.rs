// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Count-bounded preload cache.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

/// Queue length below which the access log is never compacted.
const MIN_COMPACT_LEN: usize = 64;

/// Load state of a single cached resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreloadState<V> {
    /// Requested, but the host has not reported an outcome yet.
    Pending,
    /// Loaded successfully.
    Ready(V),
    /// The load failed.
    Failed,
}

impl<V> PreloadState<V> {
    /// Returns the loaded value, if any.
    #[must_use]
    pub fn ready(&self) -> Option<&V> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` for [`PreloadState::Pending`].
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` for [`PreloadState::Failed`].
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Aggregate load state of a set of keys.
///
/// See [`PreloadCache::window_status`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum WindowStatus {
    /// At least one key is pending, unknown, or was evicted, and none failed.
    Loading,
    /// Every key is loaded.
    Ready,
    /// At least one key failed to load.
    Failed,
}

#[derive(Clone, Debug)]
struct Entry<V> {
    state: PreloadState<V>,
    /// Eviction only removes an entry when a popped `(key, stamp)` matches this.
    last_used: u64,
}

/// An owned, count-bounded cache of preloaded resources.
///
/// The cache does not load anything itself. Hosts call
/// [`PreloadCache::request`] with the keys referenced by the currently
/// visible window, start loads for the keys it returns, and report each
/// outcome through [`PreloadCache::complete`]. Loads are never cancelled; a
/// load that finishes after its window scrolled away simply populates an entry
/// that may be evicted later.
///
/// Eviction is an approximate LRU: every access pushes a `(key, stamp)` pair on
/// a queue, and eviction pops from the front, skipping pairs whose stamp is no
/// longer the entry's latest. This keeps accesses O(1) while bounding memory
/// to `capacity` entries. A capacity of `0` disables retention.
///
/// ```rust
/// use understory_preload::{PreloadCache, WindowStatus};
///
/// let mut cache = PreloadCache::<&str, u32>::new(8);
/// let to_load = cache.request(["a.png", "b.png"]);
/// assert_eq!(to_load, ["a.png", "b.png"]);
///
/// // Already in flight: nothing new to load.
/// assert!(cache.request(["a.png"]).is_empty());
///
/// cache.complete("a.png", Ok::<_, &str>(1));
/// cache.complete("b.png", Err("404"));
/// assert_eq!(cache.peek(&"a.png"), Some(&1));
/// assert_eq!(cache.window_status([&"a.png", &"b.png"]), WindowStatus::Failed);
/// ```
#[derive(Clone, Debug)]
pub struct PreloadCache<K, V> {
    capacity: usize,
    clock: u64,
    entries: HashMap<K, Entry<V>>,
    lru: VecDeque<(K, u64)>,
}

impl<K, V> PreloadCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            clock: 0,
            entries: HashMap::new(),
            lru: VecDeque::new(),
        }
    }

    /// Maximum number of retained entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity, evicting least recently used entries if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.evict_if_needed();
    }

    /// Number of retained entries, including pending and failed ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry and resets access tracking.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.clock = 0;
    }

    /// Marks `keys` as wanted and returns the ones the host should load.
    ///
    /// Keys that are already cached (in any state) are only refreshed in the
    /// LRU order. New keys are recorded as [`PreloadState::Pending`] and
    /// returned in order, without duplicates. Failed keys are not retried; use
    /// [`PreloadCache::clear_failed`] for that.
    ///
    /// If a single request names more keys than the capacity, the earliest
    /// ones may already be evicted when this returns. Their loads still
    /// complete normally.
    pub fn request<I>(&mut self, keys: I) -> Vec<K>
    where
        I: IntoIterator<Item = K>,
    {
        let mut to_load = Vec::new();
        for key in keys {
            let stamp = self.bump_clock();
            if let Some(entry) = self.entries.get_mut(&key) {
                entry.last_used = stamp;
            } else {
                self.entries.insert(
                    key.clone(),
                    Entry {
                        state: PreloadState::Pending,
                        last_used: stamp,
                    },
                );
                to_load.push(key.clone());
            }
            self.lru.push_back((key, stamp));
        }
        self.evict_if_needed();
        to_load
    }

    /// Records the outcome of a load started by the host.
    ///
    /// Failures are not fatal: they are logged (with the `tracing` feature)
    /// and recorded as [`PreloadState::Failed`]. Outcomes for keys that were
    /// evicted or never requested are inserted as fresh entries.
    pub fn complete<E>(&mut self, key: K, result: Result<V, E>)
    where
        E: fmt::Debug,
    {
        let state = match result {
            Ok(value) => PreloadState::Ready(value),
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = ?err, "preload failed");
                #[cfg(not(feature = "tracing"))]
                let _ = err;
                PreloadState::Failed
            }
        };
        let stamp = self.bump_clock();
        self.entries.insert(
            key.clone(),
            Entry {
                state,
                last_used: stamp,
            },
        );
        self.lru.push_back((key, stamp));
        self.evict_if_needed();
    }

    /// Returns the loaded value for `key` and marks it recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let owned = self.entries.get_key_value(key)?.0.clone();
        let stamp = self.bump_clock();
        self.lru.push_back((owned.clone(), stamp));
        self.compact_if_needed();
        let entry = self.entries.get_mut(&owned)?;
        entry.last_used = stamp;
        entry.state.ready()
    }

    /// Returns the loaded value for `key` without touching the LRU order.
    #[must_use]
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)?.state.ready()
    }

    /// Returns the state of `key`, if it is retained.
    #[must_use]
    pub fn state<Q>(&self, key: &Q) -> Option<&PreloadState<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).map(|entry| &entry.state)
    }

    /// Returns `true` if `key` is retained in any state.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Combined state of `keys`, mirroring an "all loaded or first failure"
    /// join.
    ///
    /// An empty set of keys is [`WindowStatus::Ready`].
    #[must_use]
    pub fn window_status<'q, Q, I>(&self, keys: I) -> WindowStatus
    where
        I: IntoIterator<Item = &'q Q>,
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'q,
    {
        let mut status = WindowStatus::Ready;
        for key in keys {
            match self.state(key) {
                Some(PreloadState::Ready(_)) => {}
                Some(PreloadState::Failed) => return WindowStatus::Failed,
                Some(PreloadState::Pending) | None => status = WindowStatus::Loading,
            }
        }
        status
    }

    /// Forgets failed entries so the next [`PreloadCache::request`] retries
    /// them. Returns how many were dropped.
    pub fn clear_failed(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.state.is_failed());
        before - self.entries.len()
    }

    fn bump_clock(&mut self) -> u64 {
        self.clock = self.clock.wrapping_add(1);
        self.clock
    }

    fn evict_if_needed(&mut self) {
        while self.entries.len() > self.capacity {
            let Some((key, stamp)) = self.lru.pop_front() else {
                break;
            };
            if self
                .entries
                .get(&key)
                .is_some_and(|entry| entry.last_used == stamp)
            {
                self.entries.remove(&key);
                #[cfg(feature = "tracing")]
                tracing::trace!(stamp, "evicted preload entry");
            }
        }
        self.compact_if_needed();
    }

    /// Drops stale access records so the queue stays proportional to the
    /// number of entries.
    fn compact_if_needed(&mut self) {
        let limit = self.entries.len().saturating_mul(2).max(MIN_COMPACT_LEN);
        if self.lru.len() <= limit {
            return;
        }
        let entries = &self.entries;
        self.lru.retain(|(key, stamp)| {
            entries
                .get(key)
                .is_some_and(|entry| entry.last_used == *stamp)
        });
    }
}
