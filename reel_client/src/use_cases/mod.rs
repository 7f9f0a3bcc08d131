// Use cases layer: spin orchestration for one reel session.

pub mod animator;
pub mod controller;
pub mod machine;

#[cfg(test)]
pub(crate) mod test_support;

pub use animator::AnimatorBinding;
pub use controller::{ControllerHandle, Intent, SpinController};
pub use machine::SpinMachine;
