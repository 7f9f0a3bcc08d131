// Value objects exchanged between the machine and the outcome provider.

use crate::domain::symbol::{SpinSequence, SymbolId};

/// A spin accepted by the machine and now in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinRequest {
    pub sequence: SpinSequence,
}

/// Untrusted reply from the provider, before range validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProviderReply {
    pub symbol_index: i64,
    pub delay_seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeSource {
    /// Chosen by the spin service.
    Server,
    /// Generated locally after the provider failed.
    Fallback,
}

/// The symbol one spin lands on. Created once per accepted spin.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub sequence: SpinSequence,
    pub symbol_id: SymbolId,
    pub suggested_delay_seconds: f64,
    pub source: OutcomeSource,
}
