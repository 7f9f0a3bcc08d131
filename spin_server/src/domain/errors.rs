use thiserror::Error;

// Domain-level errors for spin settings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("symbol count must be at least 1")]
    NoSymbols,
    #[error("minimum delay {min}s exceeds maximum delay {max}s")]
    InvertedDelayRange { min: u64, max: u64 },
}
