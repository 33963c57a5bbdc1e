/*!
 * Guard Traits
 *
 * Core abstractions shared by the value, map, and slice guards
 */

use super::GuardMetadata;

/// Core guard trait
///
/// Identifies a guard for logging/debugging.
pub trait Guard: Send + Sync {
    /// Resource type name for logging/debugging
    fn resource_type(&self) -> &'static str;

    /// Get guard metadata
    fn metadata(&self) -> &GuardMetadata;
}

/// Closure-scoped access to a guarded payload
///
/// Every method holds the lock for exactly the dynamic extent of the callback
/// and releases it on every exit path, including a panicking callback. The
/// borrow handed to the callback cannot escape it: the closure signatures are
/// higher-ranked over the borrow's lifetime.
///
/// # Reentrancy
///
/// A callback must not call back into any locking operation of the same
/// guard. Doing so deadlocks (a write section waiting on itself, or a read
/// section queued behind a waiting writer that is queued behind it).
///
/// # Example
///
/// ```rust
/// use rw_guard::{ScopedAccess, SliceGuard};
///
/// let queue = SliceGuard::from(vec![3, 1, 2]);
///
/// // Check-then-act in one critical section
/// queue.write_scoped(|items| {
///     if !items.contains(&4) {
///         items.push(4);
///     }
/// });
/// assert_eq!(queue.to_vec(), vec![3, 1, 2, 4]);
/// ```
pub trait ScopedAccess<T> {
    /// Run `f` under the read lock
    fn read_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Run a fallible `f` under the read lock, returning its error unchanged
    fn read_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&T) -> Result<R, E>;

    /// Run `f` under the write lock
    fn write_scoped<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;

    /// Run a fallible `f` under the write lock, returning its error unchanged
    ///
    /// Mutations made before the error are kept; the callback is responsible
    /// for leaving the value valid on its failure path.
    fn write_scoped_fallible<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>;
}
