use crate::domain::{
    GameState, OutcomeProvider, ProviderReply, SpinSequence, TransportError,
};
use crate::use_cases::animator::AnimatorBinding;
use crate::use_cases::machine::SpinMachine;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Intents views may dispatch into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// User pressed the spin control.
    Spin,
    /// The win popup for `sequence` has been shown long enough.
    RevealTimeout { sequence: SpinSequence },
    /// Use a new animation length for later spins.
    SetAnimationDuration(Duration),
}

// Results of work spawned by the controller, tagged with the spin they
// belong to.
#[derive(Debug)]
enum SessionEvent {
    OutcomeSettled {
        sequence: SpinSequence,
        result: Result<ProviderReply, TransportError>,
    },
    AnimationFinished {
        sequence: SpinSequence,
    },
}

/// Handle views and the session use to talk to a running controller.
pub struct ControllerHandle {
    intent_tx: mpsc::Sender<Intent>,
    state_rx: watch::Receiver<GameState>,
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl ControllerHandle {
    pub fn intents(&self) -> mpsc::Sender<Intent> {
        self.intent_tx.clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.state_rx.clone()
    }

    pub fn snapshot(&self) -> GameState {
        self.state_rx.borrow().clone()
    }

    /// Returns false once the controller has stopped.
    pub async fn dispatch(&self, intent: Intent) -> bool {
        self.intent_tx.send(intent).await.is_ok()
    }

    /// Stops the controller and waits for it to exit. In-flight requests
    /// and animations are dropped without touching the state.
    pub async fn shutdown(mut self) {
        self.shutdown.notify_one();
        if let Err(e) = (&mut self.task).await {
            if !e.is_cancelled() {
                warn!(error = %e, "spin controller task failed");
            }
        }
    }
}

// Dropping the handle stops the controller too; views may still hold
// intent senders, so the intent channel alone would keep it alive.
impl Drop for ControllerHandle {
    fn drop(&mut self) {
        self.shutdown.notify_one();
    }
}

/// Single task that owns the spin machine.
///
/// Views never touch the machine: they read snapshots from a watch channel
/// and send [`Intent`]s. Provider fetches and animations run as their own
/// tasks and report back through an event channel, tagged with the spin
/// sequence so late results from an earlier spin are dropped.
pub struct SpinController {
    machine: SpinMachine,
    provider: Arc<dyn OutcomeProvider>,
    animator: AnimatorBinding,
    state_tx: watch::Sender<GameState>,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
    fetch: Option<JoinHandle<()>>,
}

impl SpinController {
    /// Spawns the controller task and returns its handle.
    pub fn spawn(
        machine: SpinMachine,
        provider: Arc<dyn OutcomeProvider>,
        animator: AnimatorBinding,
        intent_capacity: usize,
    ) -> ControllerHandle {
        let (intent_tx, intent_rx) = mpsc::channel::<Intent>(intent_capacity);
        let (state_tx, state_rx) = watch::channel(machine.state().clone());
        let (events_tx, events_rx) = mpsc::unbounded_channel::<SessionEvent>();
        let shutdown = Arc::new(Notify::new());

        let controller = SpinController {
            machine,
            provider,
            animator,
            state_tx,
            events_tx,
            fetch: None,
        };
        let task = tokio::spawn(controller.run(intent_rx, events_rx, shutdown.clone()));

        ControllerHandle {
            intent_tx,
            state_rx,
            shutdown,
            task,
        }
    }

    async fn run(
        mut self,
        mut intent_rx: mpsc::Receiver<Intent>,
        mut events_rx: mpsc::UnboundedReceiver<SessionEvent>,
        shutdown: Arc<Notify>,
    ) {
        loop {
            tokio::select! {
                biased;
                _ = shutdown.notified() => {
                    debug!("spin controller shutting down");
                    break;
                }
                intent = intent_rx.recv() => match intent {
                    Some(intent) => self.handle_intent(intent),
                    // Every view is gone; nobody can observe the session.
                    None => break,
                },
                Some(event) = events_rx.recv() => self.handle_event(event),
            }
            self.publish();
        }

        self.teardown();
    }

    fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Spin => {
                let Some(request) = self.machine.attempt_spin() else {
                    return;
                };
                info!(sequence = %request.sequence, "spin accepted");

                let provider = Arc::clone(&self.provider);
                let events_tx = self.events_tx.clone();
                let sequence = request.sequence;
                self.fetch = Some(tokio::spawn(async move {
                    let result = provider.request_outcome().await;
                    // A closed channel means the session ended; drop the result.
                    let _ = events_tx.send(SessionEvent::OutcomeSettled { sequence, result });
                }));
            }
            Intent::RevealTimeout { sequence } => {
                if !self.is_current(sequence) {
                    debug!(%sequence, "stale reveal timeout dropped");
                    return;
                }
                self.machine.on_reveal_timeout();
            }
            Intent::SetAnimationDuration(duration) => {
                if self.machine.set_animation_duration(duration) {
                    info!(
                        duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
                        "animation duration updated"
                    );
                }
            }
        }
    }

    fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::OutcomeSettled { sequence, result } => {
                let Some(outcome) = self.machine.on_outcome_received(sequence, result) else {
                    return;
                };
                self.fetch = None;

                let events_tx = self.events_tx.clone();
                let duration = self.machine.state().animation_duration;
                self.animator
                    .begin_animation(outcome.symbol_id, duration, move || {
                        let _ = events_tx.send(SessionEvent::AnimationFinished { sequence });
                    });
            }
            SessionEvent::AnimationFinished { sequence } => {
                if !self.is_current(sequence) {
                    debug!(%sequence, "stale animation completion dropped");
                    return;
                }
                self.machine.on_animation_complete();
            }
        }
    }

    fn is_current(&self, sequence: SpinSequence) -> bool {
        self.machine.state().active_sequence() == Some(sequence)
    }

    fn publish(&self) {
        let next = self.machine.state();
        self.state_tx.send_if_modified(|current| {
            if current == next {
                return false;
            }
            *current = next.clone();
            true
        });
    }

    fn teardown(&mut self) {
        if let Some(fetch) = self.fetch.take() {
            fetch.abort();
        }
        self.animator.cancel();
        debug!(
            phase = self.machine.phase().as_str(),
            "spin controller stopped"
        );
    }
}
