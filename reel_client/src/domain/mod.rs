// Domain layer: reel data model, wheel geometry and the ports to the
// outcome provider and tween engine.

pub mod errors;
pub mod outcome;
pub mod ports;
pub mod state;
pub mod symbol;
pub mod tuning;
pub mod wheel;

pub use errors::{AssetLoadError, ConfigError, OutOfRangeOutcome, TransportError};
pub use outcome::{OutcomeSource, ProviderReply, SpinOutcome, SpinRequest};
pub use ports::{OutcomeProvider, TweenEngine};
pub use state::{GameState, Phase};
pub use symbol::{SpinSequence, SymbolId};
pub use tuning::ReelTuning;
pub use wheel::{Easing, RotationPlan, TweenSegment, WheelGeometry};
