// Frameworks layer: configuration, session wiring and the binary runtime.

pub mod config;
pub mod runtime;
pub mod session;
