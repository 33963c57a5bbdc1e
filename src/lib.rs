/*!
 * rw-guard
 * Thread-safe value, map, and slice guards built on reader/writer locks
 *
 * Every guard owns its payload and its lock. Callers never see a raw lock or
 * a reference that outlives it: values come out as clones, and borrowed access
 * only exists inside a scoped callback.
 *
 * ```rust
 * use rw_guard::{MapGuard, SliceGuard, ValueGuard};
 *
 * let config = ValueGuard::new(String::from("v1"));
 * let hits: MapGuard<&str, u64> = MapGuard::new();
 * let log = SliceGuard::new();
 *
 * config.set(String::from("v2"));
 * hits.store("/", 1);
 * log.append([config.get()]);
 *
 * assert_eq!(hits.load("/"), Some(1));
 * assert_eq!(log.to_vec(), vec!["v2".to_string()]);
 * ```
 */

pub mod errors;
pub mod guard;

// Re-exports
pub use errors::*;
pub use guard::{
    Guard, GuardConfig, GuardMetadata, MapGuard, ScopedAccess, SliceGuard, ValueGuard,
};
