use crate::domain::tuning::DEFAULT_ANIMATION_DURATION;
use crate::domain::{ConfigError, ReelTuning};
use std::path::PathBuf;
use std::{env, time::Duration};

// Runtime/client constants (not reel tuning).

pub fn spin_service_url() -> String {
    env::var("SPIN_SERVICE_URL").unwrap_or_else(|_| "http://127.0.0.1:3001".to_string())
}

pub fn request_timeout() -> Duration {
    Duration::from_millis(env_or("SPIN_REQUEST_TIMEOUT_MS", 10_000))
}

pub fn animation_duration() -> Duration {
    env::var("REEL_ANIMATION_SECS")
        .ok()
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .map(Duration::from_secs_f64)
        .unwrap_or(DEFAULT_ANIMATION_DURATION)
}

pub fn asset_dir() -> PathBuf {
    env::var("REEL_ASSET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("public"))
}

/// Spins the headless binary performs before exiting.
pub fn spin_count() -> u32 {
    env_or("REEL_SPINS", 1)
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

pub const INTENT_CHANNEL_CAPACITY: usize = 32;

pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000 / 60);

pub fn reel_tuning() -> Result<ReelTuning, ConfigError> {
    ReelTuning {
        animation_duration: animation_duration(),
        ..ReelTuning::default()
    }
    .validate()
}
