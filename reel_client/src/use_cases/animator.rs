use crate::domain::{RotationPlan, SymbolId, TweenEngine, WheelGeometry};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Binds spin outcomes to reel rotations.
///
/// Computes the two-leg rotation plan for a target symbol and runs it on
/// the tween engine. Only one animation runs at a time: starting a new one
/// aborts the previous task before its completion callback can fire.
pub struct AnimatorBinding {
    engine: Arc<dyn TweenEngine>,
    geometry: WheelGeometry,
    // Rotation the reel rests at (or is heading to), reduced to one turn.
    rotation: f64,
    running: Option<JoinHandle<()>>,
}

impl AnimatorBinding {
    pub fn new(engine: Arc<dyn TweenEngine>, geometry: WheelGeometry) -> Self {
        Self {
            engine,
            geometry,
            rotation: geometry.base_offset,
            running: None,
        }
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_running(&self) -> bool {
        self.running.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Spins the reel onto `target` over `duration`, then calls
    /// `on_complete`. Must be called inside a tokio runtime.
    pub fn begin_animation<F>(
        &mut self,
        target: SymbolId,
        duration: Duration,
        on_complete: F,
    ) -> RotationPlan
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();

        let plan = self.geometry.plan(self.rotation, target, duration);
        self.rotation = self.geometry.resting_rotation(target);
        debug!(
            target = %target,
            from = plan.from,
            to = plan.final_rotation(),
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            "animation started"
        );

        let engine = Arc::clone(&self.engine);
        self.running = Some(tokio::spawn(async move {
            engine.run(plan.from, plan.overshoot).await;
            engine.run(plan.overshoot.to, plan.settle).await;
            on_complete();
        }));

        plan
    }

    /// Stops the running animation, if any. Its callback never fires.
    pub fn cancel(&mut self) {
        if let Some(task) = self.running.take() {
            if !task.is_finished() {
                debug!("animation cancelled");
            }
            task.abort();
        }
    }
}

impl Drop for AnimatorBinding {
    fn drop(&mut self) {
        self.cancel();
    }
}
