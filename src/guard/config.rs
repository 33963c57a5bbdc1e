/*!
 * Guard Configuration
 *
 * Construction-time settings shared by all guard types
 */

/// Guard configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardConfig {
    /// Name carried into tracing events
    pub label: &'static str,
    /// Pre-allocation hint for map and slice payloads (ignored by `ValueGuard`)
    pub capacity: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GuardConfig {
    /// Unlabeled configuration with no pre-allocation
    pub const fn new() -> Self {
        Self {
            label: "unlabeled",
            capacity: 0,
        }
    }

    /// Configuration with a label for diagnostics
    pub const fn labeled(label: &'static str) -> Self {
        Self { label, capacity: 0 }
    }

    /// Set the pre-allocation hint
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
