use crate::domain::outcome::SpinOutcome;
use crate::domain::symbol::{SpinSequence, SymbolId};
use std::time::Duration;

/// Stage of the spin lifecycle. Always advances in the order
/// `Idle -> AwaitingResult -> Animating -> Revealing -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    AwaitingResult,
    Animating,
    Revealing,
}

impl Phase {
    pub fn next(self) -> Self {
        match self {
            Phase::Idle => Phase::AwaitingResult,
            Phase::AwaitingResult => Phase::Animating,
            Phase::Animating => Phase::Revealing,
            Phase::Revealing => Phase::Idle,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::AwaitingResult => "awaiting_result",
            Phase::Animating => "animating",
            Phase::Revealing => "revealing",
        }
    }
}

/// Session game state. Owned by the spin machine; everyone else reads
/// cloned snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub phase: Phase,
    // Sequence of the request still waiting on the provider.
    pub pending_sequence: Option<SpinSequence>,
    pub current_outcome: Option<SpinOutcome>,
    // Only set while revealing.
    pub revealed_symbol_id: Option<SymbolId>,
    pub animation_duration: Duration,
    // Cleared on the next spin attempt.
    pub last_error: Option<String>,
}

impl GameState {
    pub fn new(animation_duration: Duration) -> Self {
        Self {
            phase: Phase::Idle,
            pending_sequence: None,
            current_outcome: None,
            revealed_symbol_id: None,
            animation_duration,
            last_error: None,
        }
    }

    /// Sequence of the spin currently owning the reel, if any.
    pub fn active_sequence(&self) -> Option<SpinSequence> {
        self.pending_sequence
            .or_else(|| self.current_outcome.as_ref().map(|o| o.sequence))
    }
}
