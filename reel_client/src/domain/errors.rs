use crate::domain::symbol::SymbolId;
use std::path::PathBuf;
use thiserror::Error;

/// Network or parse failure from the outcome provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("spin request failed: {0}")]
    Request(String),
    #[error("spin service returned status {0}")]
    Status(u16),
    #[error("spin response could not be decoded: {0}")]
    Decode(String),
}

/// The provider named a symbol the reel does not have.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("symbol index {received} is outside 0..{symbol_count}")]
pub struct OutOfRangeOutcome {
    pub received: i64,
    pub symbol_count: u32,
}

impl OutOfRangeOutcome {
    /// Nearest valid symbol to the received index.
    pub fn clamped(&self) -> SymbolId {
        let last = i64::from(self.symbol_count.max(1) - 1);
        // Clamped into 0..=last, which always fits a u32.
        SymbolId::new(self.received.clamp(0, last) as u32)
    }
}

/// A symbol image could not be loaded.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    #[error("not enough symbol assets configured for the reel")]
    Unconfigured,
    #[error("failed to read symbol asset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rejected reel tuning.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum ConfigError {
    #[error("symbol count must be at least 1")]
    NoSymbols,
    #[error("overshoot share {0} must be within (0, 1]")]
    OvershootShare(f64),
}
