use crate::domain::{RandomSource, SpinSettings};
use std::sync::Arc;

// Application state shared by every request.
#[derive(Clone)]
pub struct AppState {
    // Source of symbol and delay picks.
    pub random: Arc<dyn RandomSource>,
    // Validated spin tuning.
    pub settings: SpinSettings,
}
