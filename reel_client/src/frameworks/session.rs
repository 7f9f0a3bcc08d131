// Session wiring: one reel, its controller task and the views on top.

use crate::domain::{GameState, OutcomeProvider, ReelTuning};
use crate::interface_adapters::assets::SymbolAtlas;
use crate::interface_adapters::shell::{PresentationShell, ShellView};
use crate::interface_adapters::tween::TickingTween;
use crate::interface_adapters::view::{ReelFrame, ReelView};
use crate::use_cases::{AnimatorBinding, ControllerHandle, Intent, SpinController, SpinMachine};
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    pub tuning: ReelTuning,
    pub frame_interval: Duration,
    pub intent_channel_capacity: usize,
}

/// One running reel. Dropping the session stops its controller, which in
/// turn ends the auto-dismiss task; `shutdown` also waits for both.
pub struct GameSession {
    controller: ControllerHandle,
    shell: PresentationShell,
    auto_dismiss: JoinHandle<()>,
    reel: ReelView,
    rotation_rx: watch::Receiver<f64>,
}

impl GameSession {
    /// Spawns the controller and the popup auto-dismiss task. Must be called
    /// inside a tokio runtime.
    pub fn start(
        settings: SessionSettings,
        provider: Arc<dyn OutcomeProvider>,
        atlas: Option<SymbolAtlas>,
        fallback: StdRng,
    ) -> Self {
        let tuning = settings.tuning;
        let geometry = tuning.geometry();

        let (tween, rotation_rx) = TickingTween::new(settings.frame_interval, geometry.base_offset);
        let animator = AnimatorBinding::new(Arc::new(tween), geometry);
        let machine = SpinMachine::new(tuning.symbol_count, tuning.animation_duration, fallback);
        let controller = SpinController::spawn(
            machine,
            provider,
            animator,
            settings.intent_channel_capacity,
        );

        let shell = PresentationShell::new(
            controller.subscribe(),
            controller.intents(),
            tuning.reveal_delay,
        );
        let auto_dismiss = shell.spawn_auto_dismiss();

        Self {
            controller,
            shell,
            auto_dismiss,
            reel: ReelView::new(geometry, atlas),
            rotation_rx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.controller.subscribe()
    }

    pub fn snapshot(&self) -> GameState {
        self.controller.snapshot()
    }

    pub fn view(&self) -> ShellView {
        self.shell.view()
    }

    /// Current reel rotation in radians.
    pub fn rotation(&self) -> f64 {
        *self.rotation_rx.borrow()
    }

    pub fn frame(&self) -> Option<ReelFrame> {
        self.reel.frame(self.rotation())
    }

    pub async fn press_spin(&self) -> bool {
        self.shell.press_spin().await
    }

    pub async fn set_animation_duration(&self, duration: Duration) -> bool {
        self.controller
            .dispatch(Intent::SetAnimationDuration(duration))
            .await
    }

    pub async fn shutdown(self) {
        self.controller.shutdown().await;
        // The watch sender is gone with the controller, so the dismiss loop
        // is already on its way out.
        if let Err(e) = self.auto_dismiss.await {
            warn!(error = %e, "auto-dismiss task failed");
        }
    }
}
