use crate::domain::{ConfigError, SpinSettings};
use std::env;

// Runtime/server constants and environment lookups (not spin tuning).

pub fn http_port() -> u16 {
    env::var("SPIN_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3001)
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

/// Spin tuning from `SPIN_SYMBOL_COUNT`, `SPIN_MIN_DELAY_SECS` and
/// `SPIN_MAX_DELAY_SECS`, falling back to the defaults for unset or
/// unparsable values.
pub fn spin_settings() -> Result<SpinSettings, ConfigError> {
    let defaults = SpinSettings::default();
    SpinSettings {
        symbol_count: env_or("SPIN_SYMBOL_COUNT", defaults.symbol_count),
        min_delay_seconds: env_or("SPIN_MIN_DELAY_SECS", defaults.min_delay_seconds),
        max_delay_seconds: env_or("SPIN_MAX_DELAY_SECS", defaults.max_delay_seconds),
    }
    .validate()
}
