// Presentation shell: maps game state to controls and forwards user intent.

use crate::domain::{GameState, Phase, SpinSequence, SymbolId};
use crate::interface_adapters::assets::symbol_asset;
use crate::use_cases::Intent;
use std::pin::Pin;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Sleep;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinButton {
    pub enabled: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinPopup {
    pub symbol_id: SymbolId,
    pub image: Option<&'static str>,
    pub title: &'static str,
}

/// Rendered affordances for one game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellView {
    pub spin_button: SpinButton,
    pub popup: Option<WinPopup>,
}

pub fn render(state: &GameState) -> ShellView {
    let idle = state.phase == Phase::Idle;
    let popup = match (state.phase, state.revealed_symbol_id) {
        (Phase::Revealing, Some(symbol_id)) => Some(WinPopup {
            symbol_id,
            image: symbol_asset(symbol_id),
            title: "Congratulations!",
        }),
        _ => None,
    };

    ShellView {
        spin_button: SpinButton {
            enabled: idle,
            label: if idle { "Spin" } else { "Spinning..." },
        },
        popup,
    }
}

/// View over controller snapshots. Reads state, dispatches intents, never
/// mutates state itself.
#[derive(Clone)]
pub struct PresentationShell {
    state_rx: watch::Receiver<GameState>,
    intent_tx: mpsc::Sender<Intent>,
    reveal_delay: Duration,
}

impl PresentationShell {
    pub fn new(
        state_rx: watch::Receiver<GameState>,
        intent_tx: mpsc::Sender<Intent>,
        reveal_delay: Duration,
    ) -> Self {
        Self {
            state_rx,
            intent_tx,
            reveal_delay,
        }
    }

    pub fn view(&self) -> ShellView {
        render(&self.state_rx.borrow())
    }

    /// Forwards a spin press. Returns false when the control is disabled or
    /// the session has ended.
    pub async fn press_spin(&self) -> bool {
        if !self.view().spin_button.enabled {
            return false;
        }
        self.intent_tx.send(Intent::Spin).await.is_ok()
    }

    /// Spawns the popup auto-dismiss loop. It exits once the controller
    /// stops.
    pub fn spawn_auto_dismiss(&self) -> JoinHandle<()> {
        tokio::spawn(self.clone().auto_dismiss())
    }

    // Arms one timer per reveal; the timer asks the controller to leave
    // `Revealing` for that exact spin.
    async fn auto_dismiss(mut self) {
        let mut armed_for: Option<SpinSequence> = None;
        let mut timer: Option<Pin<Box<Sleep>>> = None;

        loop {
            let revealing = {
                let state = self.state_rx.borrow_and_update();
                match (state.phase, state.current_outcome.as_ref()) {
                    (Phase::Revealing, Some(outcome)) => Some(outcome.sequence),
                    _ => None,
                }
            };

            match revealing {
                Some(sequence) if armed_for != Some(sequence) => {
                    debug!(
                        %sequence,
                        delay_ms = u64::try_from(self.reveal_delay.as_millis()).unwrap_or(u64::MAX),
                        "popup shown"
                    );
                    armed_for = Some(sequence);
                    timer = Some(Box::pin(tokio::time::sleep(self.reveal_delay)));
                }
                Some(_) => {}
                None => timer = None,
            }

            tokio::select! {
                changed = self.state_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = async {
                    match timer.as_mut() {
                        Some(timer) => timer.as_mut().await,
                        None => std::future::pending().await,
                    }
                } => {
                    timer = None;
                    let Some(sequence) = armed_for else { continue };
                    debug!(%sequence, "popup dismissed");
                    if self.intent_tx.send(Intent::RevealTimeout { sequence }).await.is_err() {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OutcomeSource, SpinOutcome};

    fn revealing_state(symbol: u32, sequence: u64) -> GameState {
        let mut state = GameState::new(Duration::from_secs(5));
        state.phase = Phase::Revealing;
        state.current_outcome = Some(SpinOutcome {
            sequence: SpinSequence::new(sequence),
            symbol_id: SymbolId::new(symbol),
            suggested_delay_seconds: 2.0,
            source: OutcomeSource::Server,
        });
        state.revealed_symbol_id = Some(SymbolId::new(symbol));
        state
    }

    #[test]
    fn when_idle_then_spin_is_enabled_and_popup_hidden() {
        let view = render(&GameState::new(Duration::from_secs(5)));

        assert_eq!(
            view.spin_button,
            SpinButton {
                enabled: true,
                label: "Spin"
            }
        );
        assert_eq!(view.popup, None);
    }

    #[test]
    fn when_busy_then_spin_is_disabled() {
        for phase in [Phase::AwaitingResult, Phase::Animating, Phase::Revealing] {
            let mut state = GameState::new(Duration::from_secs(5));
            state.phase = phase;

            let view = render(&state);

            assert!(!view.spin_button.enabled, "enabled in {phase:?}");
            assert_eq!(view.spin_button.label, "Spinning...");
        }
    }

    #[test]
    fn when_revealing_then_popup_shows_the_revealed_symbol() {
        let view = render(&revealing_state(3, 1));

        let popup = view.popup.expect("expected popup");
        assert_eq!(popup.symbol_id, SymbolId::new(3));
        assert_eq!(popup.image, Some("symbols/symbo4.png"));
    }

    #[tokio::test]
    async fn when_spin_is_disabled_then_press_is_not_forwarded() {
        let mut state = GameState::new(Duration::from_secs(5));
        state.phase = Phase::Animating;
        let (_state_tx, state_rx) = watch::channel(state);
        let (intent_tx, mut intent_rx) = mpsc::channel(4);
        let shell = PresentationShell::new(state_rx, intent_tx, Duration::from_secs(3));

        assert!(!shell.press_spin().await);

        assert!(intent_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn when_spin_is_enabled_then_press_sends_spin_intent() {
        let (_state_tx, state_rx) = watch::channel(GameState::new(Duration::from_secs(5)));
        let (intent_tx, mut intent_rx) = mpsc::channel(4);
        let shell = PresentationShell::new(state_rx, intent_tx, Duration::from_secs(3));

        assert!(shell.press_spin().await);

        assert_eq!(intent_rx.recv().await, Some(Intent::Spin));
    }

    #[tokio::test(start_paused = true)]
    async fn when_reveal_starts_then_timeout_is_sent_after_the_delay() {
        let (state_tx, state_rx) = watch::channel(GameState::new(Duration::from_secs(5)));
        let (intent_tx, mut intent_rx) = mpsc::channel(4);
        let shell = PresentationShell::new(state_rx, intent_tx, Duration::from_secs(3));
        let task = shell.spawn_auto_dismiss();

        tokio::task::yield_now().await;
        let revealed_at = tokio::time::Instant::now();
        state_tx.send_replace(revealing_state(6, 4));

        let intent = intent_rx.recv().await.expect("expected timeout intent");

        assert_eq!(
            intent,
            Intent::RevealTimeout {
                sequence: SpinSequence::new(4)
            }
        );
        assert!(revealed_at.elapsed() >= Duration::from_secs(3));

        drop(state_tx);
        task.await.expect("dismiss loop exits once state sender is gone");
    }

    #[tokio::test(start_paused = true)]
    async fn when_reveal_ends_early_then_timer_is_disarmed() {
        let (state_tx, state_rx) = watch::channel(revealing_state(1, 9));
        let (intent_tx, mut intent_rx) = mpsc::channel(4);
        let shell = PresentationShell::new(state_rx, intent_tx, Duration::from_secs(3));
        let task = shell.spawn_auto_dismiss();

        tokio::time::sleep(Duration::from_secs(1)).await;
        state_tx.send_replace(GameState::new(Duration::from_secs(5)));
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert!(intent_rx.try_recv().is_err());

        drop(state_tx);
        task.await.expect("dismiss loop exits");
    }
}
