use crate::domain::{
    GameState, OutcomeSource, Phase, ProviderReply, SpinOutcome, SpinRequest, SpinSequence,
    SymbolId, TransportError,
};
use rand::Rng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Authoritative spin state machine.
///
/// Owns the only [`GameState`] of a session. Every mutation goes through one
/// of the transition methods below; calls made in the wrong phase are
/// ignored and never move the phase backwards.
pub struct SpinMachine {
    state: GameState,
    symbol_count: u32,
    last_sequence: SpinSequence,
    // Source for locally generated outcomes when the provider fails.
    fallback: StdRng,
}

impl SpinMachine {
    pub fn new(symbol_count: u32, animation_duration: Duration, fallback: StdRng) -> Self {
        Self {
            state: GameState::new(animation_duration),
            symbol_count: symbol_count.max(1),
            last_sequence: SpinSequence::default(),
            fallback,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn symbol_count(&self) -> u32 {
        self.symbol_count
    }

    /// Starts a spin when idle. Busy sessions ignore the call.
    pub fn attempt_spin(&mut self) -> Option<SpinRequest> {
        if self.state.phase != Phase::Idle {
            debug!(phase = self.state.phase.as_str(), "spin ignored; session busy");
            return None;
        }

        let sequence = self.last_sequence.next();
        self.last_sequence = sequence;

        self.state.pending_sequence = Some(sequence);
        self.state.last_error = None;
        self.state.revealed_symbol_id = None;
        self.advance(Phase::AwaitingResult);

        Some(SpinRequest { sequence })
    }

    /// Settles the in-flight request. Returns the stored outcome, or `None`
    /// when the reply is stale or arrives out of phase.
    ///
    /// Provider failures fall back to a locally generated symbol so the
    /// cycle still completes; the failure is kept in `last_error`.
    pub fn on_outcome_received(
        &mut self,
        sequence: SpinSequence,
        reply: Result<ProviderReply, TransportError>,
    ) -> Option<SpinOutcome> {
        if self.state.phase != Phase::AwaitingResult
            || self.state.pending_sequence != Some(sequence)
        {
            debug!(
                %sequence,
                pending = ?self.state.pending_sequence.map(SpinSequence::value),
                phase = self.state.phase.as_str(),
                "stale outcome discarded"
            );
            return None;
        }

        let outcome = match reply {
            Ok(reply) => {
                let symbol_id = match SymbolId::checked(reply.symbol_index, self.symbol_count) {
                    Ok(symbol_id) => symbol_id,
                    Err(e) => {
                        let clamped = e.clamped();
                        warn!(%sequence, error = %e, clamped = %clamped, "out-of-range outcome clamped");
                        clamped
                    }
                };
                SpinOutcome {
                    sequence,
                    symbol_id,
                    suggested_delay_seconds: reply.delay_seconds,
                    source: OutcomeSource::Server,
                }
            }
            Err(e) => {
                let symbol_id = SymbolId::new(self.fallback.random_range(0..self.symbol_count));
                warn!(%sequence, error = %e, fallback = %symbol_id, "outcome provider failed; using local fallback");
                self.state.last_error = Some(e.to_string());
                SpinOutcome {
                    sequence,
                    symbol_id,
                    suggested_delay_seconds: 0.0,
                    source: OutcomeSource::Fallback,
                }
            }
        };

        self.state.pending_sequence = None;
        self.state.current_outcome = Some(outcome.clone());
        self.advance(Phase::Animating);

        Some(outcome)
    }

    /// Reveals the current outcome once the reel has stopped.
    pub fn on_animation_complete(&mut self) -> Option<SymbolId> {
        if self.state.phase != Phase::Animating {
            debug!(phase = self.state.phase.as_str(), "animation completion ignored");
            return None;
        }

        let symbol_id = self.state.current_outcome.as_ref()?.symbol_id;
        self.state.revealed_symbol_id = Some(symbol_id);
        self.advance(Phase::Revealing);
        info!(symbol_id = %symbol_id, "symbol revealed");

        Some(symbol_id)
    }

    /// Hides the reveal and returns to idle.
    pub fn on_reveal_timeout(&mut self) -> bool {
        if self.state.phase != Phase::Revealing {
            debug!(phase = self.state.phase.as_str(), "reveal timeout ignored");
            return false;
        }

        self.state.revealed_symbol_id = None;
        self.state.current_outcome = None;
        self.advance(Phase::Idle);

        true
    }

    /// Changes the animation length for later spins. Only applies while idle
    /// so a running spin keeps the duration it started with.
    pub fn set_animation_duration(&mut self, duration: Duration) -> bool {
        if self.state.phase != Phase::Idle {
            debug!(phase = self.state.phase.as_str(), "animation duration change ignored");
            return false;
        }
        self.state.animation_duration = duration;
        true
    }

    fn advance(&mut self, to: Phase) {
        debug_assert_eq!(self.state.phase.next(), to, "phase skipped");
        debug!(
            from = self.state.phase.as_str(),
            to = to.as_str(),
            "phase transition"
        );
        self.state.phase = to;
    }
}
