// Use cases layer: application workflows for the spin endpoint.

pub mod spin;

#[cfg(test)]
pub(crate) mod test_support;

pub use spin::SpinUseCase;
