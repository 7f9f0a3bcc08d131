//! Gameplay tuning for the reel.
//!
//! Keep this separate from runtime configuration (service URL, timeouts,
//! frame rate).

use crate::domain::errors::ConfigError;
use crate::domain::wheel::WheelGeometry;
use std::f64::consts::PI;
use std::time::Duration;

/// Distinct faces on the reel.
pub const SYMBOL_COUNT: u32 = 8;
/// Length of one spin animation, independent of the provider delay.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_secs(5);
/// Whole turns before the reel settles. Purely visual.
pub const FULL_ROTATIONS: u32 = 8;
/// How long the win popup stays up.
pub const REVEAL_DISMISS_DELAY: Duration = Duration::from_secs(3);
/// Share of the animation spent overshooting; the rest settles back.
pub const OVERSHOOT_SHARE: f64 = 0.8;
/// How far past the target the overshoot phase turns, in radians.
pub const OVERSHOOT_ANGLE: f64 = PI / 3.0;
/// Rotation that puts symbol 0 under the pointer.
pub const BASE_ROTATION_OFFSET: f64 = -PI / 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelTuning {
    pub symbol_count: u32,
    pub animation_duration: Duration,
    pub full_rotations: u32,
    pub reveal_delay: Duration,
    pub overshoot_share: f64,
    pub overshoot_angle: f64,
    pub base_offset: f64,
}

impl ReelTuning {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.symbol_count == 0 {
            return Err(ConfigError::NoSymbols);
        }
        if !(self.overshoot_share > 0.0 && self.overshoot_share <= 1.0) {
            return Err(ConfigError::OvershootShare(self.overshoot_share));
        }
        Ok(self)
    }

    pub fn geometry(&self) -> WheelGeometry {
        WheelGeometry {
            symbol_count: self.symbol_count,
            full_rotations: self.full_rotations,
            base_offset: self.base_offset,
            overshoot_angle: self.overshoot_angle,
            overshoot_share: self.overshoot_share,
        }
    }
}

impl Default for ReelTuning {
    fn default() -> Self {
        Self {
            symbol_count: SYMBOL_COUNT,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            full_rotations: FULL_ROTATIONS,
            reveal_delay: REVEAL_DISMISS_DELAY,
            overshoot_share: OVERSHOOT_SHARE,
            overshoot_angle: OVERSHOOT_ANGLE,
            base_offset: BASE_ROTATION_OFFSET,
        }
    }
}
