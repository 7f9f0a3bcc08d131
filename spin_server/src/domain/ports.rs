// Port for the randomness behind each draw, so use cases can be tested
// with a fixed source.
pub trait RandomSource: Send + Sync {
    /// Uniform symbol index in `[0, count)`.
    fn pick_symbol(&self, count: u32) -> u32;

    /// Uniform delay in `[min, max]` seconds, both ends inclusive.
    fn pick_delay(&self, min: u64, max: u64) -> u64;
}

impl<T: RandomSource + ?Sized> RandomSource for std::sync::Arc<T> {
    fn pick_symbol(&self, count: u32) -> u32 {
        (**self).pick_symbol(count)
    }

    fn pick_delay(&self, min: u64, max: u64) -> u64 {
        (**self).pick_delay(min, max)
    }
}
