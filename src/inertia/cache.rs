/*!
# Inertia Cache

Memoizes inertia sets by the canonical key of their graph, so isomorphic graphs are solved once.
Entries are never evicted; call [`InertiaCache::clear`] to start over.

The map lives behind a [`Mutex`], so a cache can be shared between solvers (and threads)
through an [`Arc`](std::sync::Arc).
*/

use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

use fxhash::FxHashMap;

use super::*;

/// Thread-safe memoization table from canonical graph keys to inertia sets
#[derive(Debug, Default)]
pub struct InertiaCache {
    sets: Mutex<FxHashMap<GraphKey, InertiaSet>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl InertiaCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation on the map leaves it consistent, so a poisoned lock is still usable
    fn lock(&self) -> MutexGuard<'_, FxHashMap<GraphKey, InertiaSet>> {
        self.sets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the cached set for `key` and records a hit or miss
    pub fn get(&self, key: &GraphKey) -> Option<InertiaSet> {
        let result = self.lock().get(key).cloned();
        let counter = if result.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        result
    }

    /// Returns *true* if `key` is cached; does not count as hit or miss
    pub fn contains(&self, key: &GraphKey) -> bool {
        self.lock().contains_key(key)
    }

    /// Stores `set` under `key` and returns the previously cached set, if any
    pub fn insert(&self, key: GraphKey, set: InertiaSet) -> Option<InertiaSet> {
        self.lock().insert(key, set)
    }

    /// Number of cached graphs
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes all entries and resets the counters
    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Number of successful lookups
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of failed lookups
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    /// Looks `graph` up under `key` and falls back to the known shapes.
    /// Neither outcome modifies the cache.
    pub fn recognize<G: InertiaGraph>(&self, graph: &G, key: &GraphKey) -> Recognition {
        match self.get(key) {
            Some(set) => Recognition::Known(set),
            None => recognize(graph),
        }
    }
}
