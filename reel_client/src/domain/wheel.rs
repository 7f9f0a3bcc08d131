use crate::domain::symbol::SymbolId;
use std::f64::consts::TAU;
use std::time::Duration;

/// Easing curves used by the two spin phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Cubic deceleration.
    PowerOut,
    /// Damped oscillation around the end value (amplitude 1, period 0.5).
    ElasticOut,
}

impl Easing {
    /// Maps progress `t` in `[0, 1]` to eased progress. Exact at both ends.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::PowerOut => 1.0 - (1.0 - t).powi(3),
            Easing::ElasticOut => {
                const PERIOD: f64 = 0.5;
                // With amplitude 1 the phase shift is a quarter period.
                let shift = PERIOD / 4.0;
                2f64.powf(-10.0 * t) * ((t - shift) * TAU / PERIOD).sin() + 1.0
            }
        }
    }
}

/// One tween leg: turn to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSegment {
    pub to: f64,
    pub duration: Duration,
    pub easing: Easing,
}

impl TweenSegment {
    /// Rotation at progress `t` when the leg started at `from`.
    pub fn value_at(&self, from: f64, t: f64) -> f64 {
        from + (self.to - from) * self.easing.apply(t)
    }
}

/// Overshoot past the target, then settle back onto it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationPlan {
    pub from: f64,
    pub overshoot: TweenSegment,
    pub settle: TweenSegment,
}

impl RotationPlan {
    pub fn final_rotation(&self) -> f64 {
        self.settle.to
    }

    pub fn total_duration(&self) -> Duration {
        self.overshoot.duration + self.settle.duration
    }
}

/// Maps symbols to reel rotations.
///
/// Symbol `k` is drawn at angle `k * step` on the wheel, so turning the
/// wheel by `-k * step` from the base offset brings it under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelGeometry {
    pub symbol_count: u32,
    pub full_rotations: u32,
    pub base_offset: f64,
    pub overshoot_angle: f64,
    pub overshoot_share: f64,
}

impl WheelGeometry {
    /// Angle between neighbouring symbols.
    pub fn step(&self) -> f64 {
        TAU / f64::from(self.symbol_count.max(1))
    }

    /// Angle at which `symbol` is drawn on the wheel.
    pub fn symbol_angle(&self, symbol: SymbolId) -> f64 {
        f64::from(symbol.index()) * self.step()
    }

    /// Rotation within one turn that shows `symbol` under the pointer.
    pub fn resting_rotation(&self, symbol: SymbolId) -> f64 {
        self.base_offset - self.symbol_angle(symbol)
    }

    /// Resting rotation plus the configured number of whole turns.
    pub fn final_rotation(&self, symbol: SymbolId) -> f64 {
        f64::from(self.full_rotations) * TAU + self.resting_rotation(symbol)
    }

    /// Symbol whose slot is closest to the pointer at `rotation`.
    pub fn symbol_under_pointer(&self, rotation: f64) -> SymbolId {
        let turned = (self.base_offset - rotation).rem_euclid(TAU);
        let count = self.symbol_count.max(1);
        let slot = (turned / self.step()).round() as u32 % count;
        SymbolId::new(slot)
    }

    /// Two-leg plan from `from` to the final rotation for `target`.
    pub fn plan(&self, from: f64, target: SymbolId, duration: Duration) -> RotationPlan {
        let to = self.final_rotation(target);
        let overshoot_duration = duration.mul_f64(self.overshoot_share.clamp(0.0, 1.0));

        RotationPlan {
            from,
            overshoot: TweenSegment {
                to: to + self.overshoot_angle,
                duration: overshoot_duration,
                easing: Easing::PowerOut,
            },
            settle: TweenSegment {
                to,
                duration: duration.saturating_sub(overshoot_duration),
                easing: Easing::ElasticOut,
            },
        }
    }
}
