use crate::domain::errors::ConfigError;
use std::time::Duration;

/// One server-side spin result: the symbol the reel must land on and how
/// long the response is held back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinDraw {
    pub symbol_id: u32,
    pub delay_seconds: u64,
}

impl SpinDraw {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_seconds)
    }
}

/// Tuning for the spin endpoint.
///
/// Keep this separate from runtime/server configuration (ports, log format).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinSettings {
    /// Number of distinct symbols on the reel.
    pub symbol_count: u32,

    /// Shortest artificial response delay in seconds.
    pub min_delay_seconds: u64,

    /// Longest artificial response delay in seconds (inclusive).
    pub max_delay_seconds: u64,
}

impl SpinSettings {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.symbol_count == 0 {
            return Err(ConfigError::NoSymbols);
        }
        if self.min_delay_seconds > self.max_delay_seconds {
            return Err(ConfigError::InvertedDelayRange {
                min: self.min_delay_seconds,
                max: self.max_delay_seconds,
            });
        }
        Ok(self)
    }

    /// Settings with no artificial delay, for tests and local tooling.
    pub fn immediate() -> Self {
        Self {
            min_delay_seconds: 0,
            max_delay_seconds: 0,
            ..Self::default()
        }
    }
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            symbol_count: 8,
            min_delay_seconds: 2,
            max_delay_seconds: 4,
        }
    }
}
