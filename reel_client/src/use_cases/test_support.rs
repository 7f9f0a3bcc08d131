use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::ports::{OutcomeProvider, TweenEngine};
use crate::domain::{ProviderReply, TransportError, TweenSegment};

// One scripted provider response: how long to wait and what to return.
pub(crate) struct Script {
    pub delay: Duration,
    pub reply: Result<ProviderReply, TransportError>,
}

impl Script {
    pub(crate) fn symbol(symbol_index: i64, delay_seconds: u64) -> Self {
        Self {
            delay: Duration::from_secs(delay_seconds),
            reply: Ok(ProviderReply {
                symbol_index,
                delay_seconds: delay_seconds as f64,
            }),
        }
    }

    pub(crate) fn failure(delay: Duration, error: TransportError) -> Self {
        Self {
            delay,
            reply: Err(error),
        }
    }
}

// Provider that replays scripted responses in order; an exhausted script
// answers with a transport error.
#[derive(Default)]
pub(crate) struct ScriptedProvider {
    scripts: Mutex<VecDeque<Script>>,
    calls: AtomicUsize,
    completed: AtomicUsize,
}

impl ScriptedProvider {
    pub(crate) fn new(scripts: impl IntoIterator<Item = Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into_iter().collect()),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OutcomeProvider for ScriptedProvider {
    async fn request_outcome(&self) -> Result<ProviderReply, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let script = self
            .scripts
            .lock()
            .expect("scripts mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Script::failure(
                    Duration::ZERO,
                    TransportError::Request("script exhausted".to_string()),
                )
            });

        tokio::time::sleep(script.delay).await;
        self.completed.fetch_add(1, Ordering::SeqCst);
        script.reply
    }
}

// Tween engine that records every segment and just waits out its duration.
#[derive(Default)]
pub(crate) struct RecordingTween {
    runs: Mutex<Vec<(f64, TweenSegment)>>,
}

impl RecordingTween {
    pub(crate) fn runs(&self) -> Vec<(f64, TweenSegment)> {
        self.runs.lock().expect("runs mutex poisoned").clone()
    }
}

#[async_trait]
impl TweenEngine for RecordingTween {
    async fn run(&self, from: f64, segment: TweenSegment) {
        self.runs
            .lock()
            .expect("runs mutex poisoned")
            .push((from, segment));
        tokio::time::sleep(segment.duration).await;
    }
}
