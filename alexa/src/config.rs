//! Configuration for the ISP client.

use std::time::Duration;

/// Timeout applied when none (or zero) is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings fixed at client construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IspConfig {
    /// Upper bound on the whole ISP call, body included
    pub timeout: Duration,
    /// Emit a debug trail for every step of a fetch
    pub debug_logging: bool,
}

impl Default for IspConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_REQUEST_TIMEOUT,
            debug_logging: false,
        }
    }
}

impl IspConfig {
    /// Override the request timeout. A zero duration keeps the default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = if timeout.is_zero() {
            DEFAULT_REQUEST_TIMEOUT
        } else {
            timeout
        };
        self
    }

    /// Toggle the per-step debug trail.
    pub fn with_debug_logging(mut self, enabled: bool) -> Self {
        self.debug_logging = enabled;
        self
    }
}
