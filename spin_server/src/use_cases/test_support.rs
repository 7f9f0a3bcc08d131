use crate::domain::RandomSource;

// Deterministic random source for use-case and route tests.
#[derive(Clone, Copy)]
pub(crate) struct FixedRandom {
    symbol: u32,
    delay: u64,
}

impl FixedRandom {
    pub(crate) fn new(symbol: u32, delay: u64) -> Self {
        Self { symbol, delay }
    }
}

impl RandomSource for FixedRandom {
    fn pick_symbol(&self, _count: u32) -> u32 {
        self.symbol
    }

    fn pick_delay(&self, _min: u64, _max: u64) -> u64 {
        self.delay
    }
}
