use crate::domain::SpinDraw;
use serde::Serialize;

// Response payload for a finished spin. `result` is the symbol index.
#[derive(Debug, Serialize)]
pub struct SpinResponse {
    pub result: u32,
    pub delay: u64,
}

impl From<SpinDraw> for SpinResponse {
    fn from(draw: SpinDraw) -> Self {
        Self {
            result: draw.symbol_id,
            delay: draw.delay_seconds,
        }
    }
}

// Liveness payload for readiness probes.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
