use crate::domain::errors::OutOfRangeOutcome;
use std::fmt;

/// Index of one face on the reel, in `[0, N)` for an `N`-symbol reel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u32 {
        self.0
    }

    /// Accepts `raw` only when it names one of `symbol_count` faces.
    ///
    /// The error carries the clamped replacement, see
    /// [`OutOfRangeOutcome::clamped`].
    pub fn checked(raw: i64, symbol_count: u32) -> Result<Self, OutOfRangeOutcome> {
        if (0..i64::from(symbol_count)).contains(&raw) {
            // In range of a u32 count, so the cast is lossless.
            Ok(Self(raw as u32))
        } else {
            Err(OutOfRangeOutcome {
                received: raw,
                symbol_count,
            })
        }
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic identifier of one spin attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SpinSequence(u64);

impl SpinSequence {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for SpinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
