/*!
 * Slice Guard
 *
 * Ordered sequence whose every operation is one critical section on an
 * embedded `ValueGuard`
 */

use super::traits::{Guard, ScopedAccess};
use super::{GuardConfig, GuardMetadata, ValueGuard};
use crate::errors::{GuardError, GuardResult};
use std::fmt;

/// Thread-safe ordered sequence
///
/// Order is preserved by every operation except [`unshift`](Self::unshift),
/// which inserts at the front.
///
/// # Example
///
/// ```rust
/// use rw_guard::SliceGuard;
///
/// let jobs = SliceGuard::new();
/// jobs.append([1, 2, 3]);
/// jobs.unshift(0);
/// assert_eq!(jobs.to_vec(), vec![0, 1, 2, 3]);
///
/// assert_eq!(jobs.remove(1), 1);
/// assert_eq!(jobs.to_vec(), vec![0, 2, 3]);
/// ```
pub struct SliceGuard<T> {
    inner: ValueGuard<Vec<T>>,
}

impl<T> SliceGuard<T> {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::with_config(GuardConfig::default())
    }

    /// Create an empty sequence with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(GuardConfig::new().with_capacity(capacity))
    }

    /// Create an empty sequence with explicit configuration
    pub fn with_config(config: GuardConfig) -> Self {
        Self {
            inner: ValueGuard::with_resource_type(
                Vec::with_capacity(config.capacity),
                "slice",
                config,
            ),
        }
    }

    pub(crate) fn from_vec(items: Vec<T>) -> Self {
        Self {
            inner: ValueGuard::with_resource_type(items, "slice", GuardConfig::default()),
        }
    }

    /// Append `items` at the end, in iteration order
    ///
    /// The iterator is drained inside the write section; it must not touch
    /// this guard.
    pub fn append<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.write_scoped(|v| v.extend(items));
    }

    /// Insert `item` at index 0, shifting everything right
    pub fn unshift(&self, item: T) {
        self.inner.write_scoped(|v| v.insert(0, item));
    }

    /// Remove and return the element at `index`, shifting later elements left
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`. Validate with
    /// [`try_remove`](Self::try_remove) or inside a scoped callback when
    /// the index may be stale.
    pub fn remove(&self, index: usize) -> T {
        let label = self.inner.metadata().label;
        self.inner.write_scoped(|v| {
            let len = v.len();
            if index >= len {
                tracing::error!(label, index, len, "slice remove index out of bounds");
                panic!("SliceGuard::remove index {index} out of bounds for length {len}");
            }
            v.remove(index)
        })
    }

    /// Checked [`remove`](Self::remove)
    pub fn try_remove(&self, index: usize) -> GuardResult<T> {
        self.inner.write_scoped(|v| {
            if index < v.len() {
                Ok(v.remove(index))
            } else {
                Err(GuardError::IndexOutOfBounds {
                    index,
                    len: v.len(),
                })
            }
        })
    }

    /// Remove and return the last element
    pub fn pop(&self) -> Option<T> {
        self.inner.write_scoped(Vec::pop)
    }

    /// Keep only the elements matching `f`, preserving order
    pub fn retain<F>(&self, f: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.inner.write_scoped(|v| v.retain(f));
    }

    /// Clone the element at `index`
    pub fn get(&self, index: usize) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read_scoped(|v| v.get(index).cloned())
    }

    /// Independent copy of the sequence
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.get()
    }

    /// Visit every element in order under one read section
    ///
    /// `f` must not call back into this guard.
    pub fn each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.inner.read_scoped(|v| v.iter().for_each(f));
    }

    pub fn len(&self) -> usize {
        self.inner.read_scoped(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read_scoped(Vec::is_empty)
    }

    /// Remove all elements; capacity is retained
    pub fn clear(&self) {
        self.inner.write_scoped(Vec::clear);
    }

    /// Consume the guard and return the sequence
    pub fn into_inner(self) -> Vec<T> {
        self.inner.into_inner()
    }

    /// Guard metadata
    pub fn metadata(&self) -> &GuardMetadata {
        self.inner.metadata()
    }
}

impl<T> ScopedAccess<Vec<T>> for SliceGuard<T> {
    fn read_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<T>) -> R,
    {
        self.inner.read_scoped(f)
    }

    fn read_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&Vec<T>) -> Result<R, E>,
    {
        self.inner.read_scoped_fallible(f)
    }

    fn write_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut Vec<T>) -> R,
    {
        self.inner.write_scoped(f)
    }

    fn write_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, E>,
    {
        self.inner.write_scoped_fallible(f)
    }
}

impl<T: Send + Sync> Guard for SliceGuard<T> {
    fn resource_type(&self) -> &'static str {
        self.inner.metadata().resource_type
    }

    fn metadata(&self) -> &GuardMetadata {
        self.inner.metadata()
    }
}

impl<T> Default for SliceGuard<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for SliceGuard<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T> FromIterator<T> for SliceGuard<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SliceGuard").field(&self.inner).finish()
    }
}
