// Domain layer: spin draws, their settings and the randomness port.

pub mod errors;
pub mod ports;
pub mod spin;

pub use errors::ConfigError;
pub use ports::RandomSource;
pub use spin::{SpinDraw, SpinSettings};
