use crate::domain::RandomSource;
use rand::Rng;

/// `RandomSource` backed by the thread-local generator.
///
/// The generator is fetched per call so no non-`Send` handle is held
/// across an await.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_symbol(&self, count: u32) -> u32 {
        rand::rng().random_range(0..count.max(1))
    }

    fn pick_delay(&self, min: u64, max: u64) -> u64 {
        rand::rng().random_range(min..=max.max(min))
    }
}
