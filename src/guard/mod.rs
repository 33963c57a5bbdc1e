/*!
 * Reader/Writer Guards
 *
 * Thread-safe containers whose payload is only reachable through the lock.
 *
 * ## Guard Types
 *
 * - **ValueGuard**: One value of any type
 * - **MapGuard**: Hash map with atomic store/load/delete
 * - **SliceGuard**: Ordered sequence with atomic append/remove
 *
 * `MapGuard` and `SliceGuard` embed a `ValueGuard` and run every operation as
 * one scoped callback on it, so all locking lives in `ValueGuard`.
 *
 * ## Rules
 *
 * - Operations on one guard are linearizable.
 * - Nothing is ordered across different guards; locking several guards in
 *   inconsistent orders can deadlock.
 * - Callbacks must not re-enter the guard that is running them.
 */

mod config;
mod map;
mod serialize;
mod slice;
mod traits;
mod value;

pub use config::GuardConfig;
pub use map::MapGuard;
pub use slice::SliceGuard;
pub use traits::{Guard, ScopedAccess};
pub use value::ValueGuard;

/// Guard metadata for observability
#[derive(Debug, Clone)]
pub struct GuardMetadata {
    pub resource_type: &'static str,
    pub label: &'static str,
    pub creation_time: std::time::Instant,
}

impl GuardMetadata {
    #[inline]
    pub fn new(resource_type: &'static str) -> Self {
        Self {
            resource_type,
            label: GuardConfig::new().label,
            creation_time: std::time::Instant::now(),
        }
    }

    #[inline]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    #[inline]
    pub fn lifetime_micros(&self) -> u64 {
        self.creation_time.elapsed().as_micros() as u64
    }
}
