//! Ledger engine configuration

use std::time::Duration;

use super::balance::DEFAULT_LOCK_WAIT;

/// Configuration for the ledger engine
///
/// Currently only the bounded lock wait is tunable; the currency and the
/// decision protocol are fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Bounded wait applied to every balance lock acquisition
    pub lock_wait: Duration,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig {
            lock_wait: DEFAULT_LOCK_WAIT,
        }
    }
}

impl LedgerConfig {
    /// Create a configuration with the given lock wait in milliseconds
    ///
    /// A zero value falls back to the default with a warning, mirroring how
    /// other invalid tunables are handled at the CLI boundary.
    pub fn new(lock_wait_ms: u64) -> Self {
        if lock_wait_ms == 0 {
            log::warn!(
                "lock-wait-ms of 0 is not usable, falling back to {} ms",
                DEFAULT_LOCK_WAIT.as_millis()
            );
            return Self::default();
        }
        LedgerConfig {
            lock_wait: Duration::from_millis(lock_wait_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default_bound(LedgerConfig::default(), 100)]
    #[case::custom_bound(LedgerConfig::new(250), 250)]
    #[case::zero_falls_back(LedgerConfig::new(0), 100)]
    fn test_lock_wait(#[case] config: LedgerConfig, #[case] expected_ms: u64) {
        assert_eq!(config.lock_wait, Duration::from_millis(expected_ms));
    }
}
