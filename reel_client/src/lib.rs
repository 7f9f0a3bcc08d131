pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use domain::ReelTuning;
pub use frameworks::runtime::{play, run_with_config};
pub use frameworks::session::{GameSession, SessionSettings};
pub use interface_adapters::clients::spin::HttpOutcomeProvider;
