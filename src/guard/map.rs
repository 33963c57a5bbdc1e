/*!
 * Map Guard
 *
 * Hash map whose every operation is one critical section on an embedded
 * `ValueGuard`
 */

use super::traits::{Guard, ScopedAccess};
use super::{GuardConfig, GuardMetadata, ValueGuard};
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// Thread-safe hash map
///
/// Lookups (`load`, `len`, `contains_key`, ...) share the read lock; anything
/// that mutates takes the write lock. Values are cloned out; use
/// [`load_with`](Self::load_with) to inspect a value in place.
///
/// # Example
///
/// ```rust
/// use rw_guard::MapGuard;
///
/// let sessions: MapGuard<String, u32> = MapGuard::new();
/// sessions.store("alice".to_string(), 1);
///
/// assert_eq!(sessions.load("alice"), Some(1));
/// assert_eq!(sessions.load_and_delete("alice"), Some(1));
/// assert_eq!(sessions.load("alice"), None);
/// ```
pub struct MapGuard<K, V, S = ahash::RandomState> {
    inner: ValueGuard<HashMap<K, V, S>>,
}

impl<K: Hash + Eq, V> MapGuard<K, V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::with_config(GuardConfig::default())
    }

    /// Create an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GuardConfig::new().with_capacity(capacity))
    }

    /// Create an empty map with explicit configuration
    pub fn with_config(config: GuardConfig) -> Self {
        Self::with_config_and_hasher(config, ahash::RandomState::new())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> MapGuard<K, V, S> {
    /// Create an empty map using `hasher`
    pub fn with_config_and_hasher(config: GuardConfig, hasher: S) -> Self {
        let map = HashMap::with_capacity_and_hasher(config.capacity, hasher);
        Self {
            inner: ValueGuard::with_resource_type(map, "map", config),
        }
    }

    /// Insert or overwrite
    pub fn store(&self, key: K, value: V) {
        let previous = self.inner.write_scoped(|map| map.insert(key, value));
        // Dropped outside the lock
        drop(previous);
    }

    /// Insert or overwrite, returning the previous value
    pub fn swap(&self, key: K, value: V) -> Option<V> {
        self.inner.write_scoped(|map| map.insert(key, value))
    }

    /// Return the existing value for `key`, or store `value` and return it
    ///
    /// The flag is `true` when the value was already present.
    pub fn load_or_store(&self, key: K, value: V) -> (V, bool)
    where
        V: Clone,
    {
        self.inner.write_scoped(|map| match map.entry(key) {
            Entry::Occupied(entry) => (entry.get().clone(), true),
            Entry::Vacant(entry) => (entry.insert(value).clone(), false),
        })
    }

    /// Clone the value for `key`; `None` when absent
    pub fn load<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.inner.read_scoped(|map| map.get(key).cloned())
    }

    /// Inspect the value for `key` in place under the read lock
    pub fn load_with<Q, R, F>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce(&V) -> R,
    {
        self.inner.read_scoped(|map| map.get(key).map(f))
    }

    /// Mutate the value for `key` in place under the write lock
    pub fn update<Q, R, F>(&self, key: &Q, f: F) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnOnce(&mut V) -> R,
    {
        self.inner.write_scoped(|map| map.get_mut(key).map(f))
    }

    /// Remove `key` and return its value in one critical section
    pub fn load_and_delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.write_scoped(|map| map.remove(key))
    }

    /// Remove `key` if present
    pub fn delete<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        drop(self.load_and_delete(key));
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.read_scoped(|map| map.contains_key(key))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.inner.read_scoped(HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read_scoped(HashMap::is_empty)
    }

    /// Remove all entries, keeping the allocated capacity
    pub fn clear(&self) {
        self.inner.write_scoped(HashMap::clear);
    }

    /// Visit every entry under one read section
    ///
    /// `f` must not call back into this map.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&K, &V),
    {
        self.inner.read_scoped(|map| {
            for (k, v) in map {
                f(k, v);
            }
        });
    }

    /// Clone all keys out
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.inner.read_scoped(|map| map.keys().cloned().collect())
    }

    /// Independent copy of the whole map
    pub fn snapshot(&self) -> HashMap<K, V, S>
    where
        K: Clone,
        V: Clone,
        S: Clone,
    {
        self.inner.get()
    }
}

impl<K, V, S> MapGuard<K, V, S> {
    pub(crate) fn from_map(map: HashMap<K, V, S>) -> Self {
        Self {
            inner: ValueGuard::with_resource_type(map, "map", GuardConfig::default()),
        }
    }

    /// Consume the guard and return the map
    pub fn into_inner(self) -> HashMap<K, V, S> {
        self.inner.into_inner()
    }

    /// Guard metadata
    pub fn metadata(&self) -> &GuardMetadata {
        self.inner.metadata()
    }
}

impl<K, V, S> ScopedAccess<HashMap<K, V, S>> for MapGuard<K, V, S> {
    fn read_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&HashMap<K, V, S>) -> R,
    {
        self.inner.read_scoped(f)
    }

    fn read_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&HashMap<K, V, S>) -> Result<R, E>,
    {
        self.inner.read_scoped_fallible(f)
    }

    fn write_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut HashMap<K, V, S>) -> R,
    {
        self.inner.write_scoped(f)
    }

    fn write_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut HashMap<K, V, S>) -> Result<R, E>,
    {
        self.inner.write_scoped_fallible(f)
    }
}

impl<K, V, S> Guard for MapGuard<K, V, S>
where
    K: Send + Sync,
    V: Send + Sync,
    S: Send + Sync,
{
    fn resource_type(&self) -> &'static str {
        self.inner.metadata().resource_type
    }

    fn metadata(&self) -> &GuardMetadata {
        self.inner.metadata()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> Default for MapGuard<K, V, S> {
    fn default() -> Self {
        Self::with_config_and_hasher(GuardConfig::default(), S::default())
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for MapGuard<K, V, S> {
    fn from(map: HashMap<K, V, S>) -> Self {
        Self::from_map(map)
    }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for MapGuard<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for MapGuard<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MapGuard").field(&self.inner).finish()
    }
}
