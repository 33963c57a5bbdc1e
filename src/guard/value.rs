/*!
 * Value Guard
 *
 * Reader/writer guarded single value
 */

use super::traits::{Guard, ScopedAccess};
use super::{GuardConfig, GuardMetadata};
use parking_lot::RwLock;
use std::fmt;

/// Thread-safe wrapper around one value of type `T`
///
/// Readers share the lock; a writer excludes everyone. Values leave the guard
/// only as clones or as results computed inside a scoped callback.
///
/// # Example
///
/// ```rust
/// use rw_guard::ValueGuard;
///
/// let retries = ValueGuard::new(0u32);
/// retries.set(3);
/// assert_eq!(retries.get(), 3);
///
/// // Read-modify-write in one critical section
/// let next = retries.write_scoped(|n| {
///     *n += 1;
///     *n
/// });
/// assert_eq!(next, 4);
/// ```
///
/// A callback cannot keep the borrow it was handed:
///
/// ```compile_fail
/// use rw_guard::ValueGuard;
///
/// let name = ValueGuard::new(String::from("primary"));
/// let mut leaked: &str = "";
/// name.read_scoped(|s| leaked = s.as_str());
/// println!("{}", leaked);
/// ```
pub struct ValueGuard<T> {
    value: RwLock<T>,
    metadata: GuardMetadata,
}

impl<T> ValueGuard<T> {
    /// Create a guard around an initial value
    pub fn new(value: T) -> Self {
        Self::with_config(value, GuardConfig::default())
    }

    /// Create a guard with explicit configuration
    pub fn with_config(value: T, config: GuardConfig) -> Self {
        Self::with_resource_type(value, "value", config)
    }

    pub(crate) fn with_resource_type(
        value: T,
        resource_type: &'static str,
        config: GuardConfig,
    ) -> Self {
        tracing::trace!(resource_type, label = config.label, "guard created");
        Self {
            value: RwLock::new(value),
            metadata: GuardMetadata::new(resource_type).with_label(config.label),
        }
    }

    /// Clone the current value out under the read lock
    #[inline]
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.value.read().clone()
    }

    /// Replace the value under the write lock
    ///
    /// The previous value is dropped after the lock is released.
    #[inline]
    pub fn set(&self, value: T) {
        drop(self.replace(value));
    }

    /// Replace the value, returning the previous one
    #[inline]
    pub fn replace(&self, value: T) -> T {
        std::mem::replace(&mut *self.value.write(), value)
    }

    /// Take the value, leaving `T::default()` in its place
    #[inline]
    pub fn take(&self) -> T
    where
        T: Default,
    {
        std::mem::take(&mut *self.value.write())
    }

    /// Run `f` with a shared borrow while holding the read lock
    ///
    /// Any number of readers may run concurrently; no writer proceeds until
    /// `f` returns. `f` must not call back into this guard.
    pub fn read_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.value.read();
        f(&guard)
    }

    /// Fallible [`read_scoped`](Self::read_scoped); the error is returned
    /// unchanged once the lock is released
    pub fn read_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&T) -> Result<R, E>,
    {
        let result = self.read_scoped(f);
        if result.is_err() {
            tracing::debug!(
                resource_type = self.metadata.resource_type,
                label = self.metadata.label,
                "read callback returned an error"
            );
        }
        result
    }

    /// Run `f` with an exclusive borrow while holding the write lock
    ///
    /// `f` must not call back into this guard.
    pub fn write_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut guard = self.value.write();
        f(&mut guard)
    }

    /// Fallible [`write_scoped`](Self::write_scoped); the error is returned
    /// unchanged once the lock is released
    ///
    /// Mutations `f` made before failing are kept.
    pub fn write_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        let result = self.write_scoped(f);
        if result.is_err() {
            tracing::debug!(
                resource_type = self.metadata.resource_type,
                label = self.metadata.label,
                "write callback returned an error"
            );
        }
        result
    }

    /// Exclusive access without locking; `&mut self` already proves exclusivity
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    /// Consume the guard and return the value
    #[inline]
    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    /// Guard metadata
    #[inline]
    pub fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }
}

impl<T> ScopedAccess<T> for ValueGuard<T> {
    fn read_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        ValueGuard::read_scoped(self, f)
    }

    fn read_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&T) -> Result<R, E>,
    {
        ValueGuard::read_scoped_fallible(self, f)
    }

    fn write_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        ValueGuard::write_scoped(self, f)
    }

    fn write_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        ValueGuard::write_scoped_fallible(self, f)
    }
}

impl<T: Send + Sync> Guard for ValueGuard<T> {
    fn resource_type(&self) -> &'static str {
        self.metadata.resource_type
    }

    fn metadata(&self) -> &GuardMetadata {
        &self.metadata
    }
}

impl<T: Default> Default for ValueGuard<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for ValueGuard<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

// Never blocks: a held write lock prints as `<locked>`
impl<T: fmt::Debug> fmt::Debug for ValueGuard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("ValueGuard");
        d.field("label", &self.metadata.label);
        match self.value.try_read() {
            Some(value) => d.field("value", &&*value),
            None => d.field("value", &format_args!("<locked>")),
        };
        d.finish()
    }
}
