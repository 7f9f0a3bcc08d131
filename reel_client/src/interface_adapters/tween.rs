use crate::domain::{TweenEngine, TweenSegment};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

/// Frame-stepped tween engine.
///
/// Publishes the eased reel rotation into a watch channel once per frame.
/// The last frame of every segment is written as the exact target value.
pub struct TickingTween {
    frame_interval: Duration,
    rotation_tx: watch::Sender<f64>,
}

impl TickingTween {
    pub fn new(frame_interval: Duration, initial_rotation: f64) -> (Self, watch::Receiver<f64>) {
        let (rotation_tx, rotation_rx) = watch::channel(initial_rotation);
        (
            Self {
                frame_interval,
                rotation_tx,
            },
            rotation_rx,
        )
    }
}

#[async_trait]
impl TweenEngine for TickingTween {
    async fn run(&self, from: f64, segment: TweenSegment) {
        if segment.duration.is_zero() {
            self.rotation_tx.send_replace(segment.to);
            return;
        }

        let started = Instant::now();
        let total = segment.duration.as_secs_f64();
        let mut interval = tokio::time::interval(self.frame_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;
            let t = started.elapsed().as_secs_f64() / total;
            if t >= 1.0 {
                break;
            }
            self.rotation_tx.send_replace(segment.value_at(from, t));
        }

        self.rotation_tx.send_replace(segment.to);
    }
}
