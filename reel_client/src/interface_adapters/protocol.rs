// Wire DTOs for the spin service.

use crate::domain::ProviderReply;
use serde::Deserialize;

/// Body of `GET /api/spin`. Older services name the index `symbolId`.
///
/// The index is read as any JSON number so that `3.0` or an index past
/// `i64` still reaches range clamping instead of failing to decode.
#[derive(Debug, Clone, Deserialize)]
pub struct SpinResponseDto {
    #[serde(alias = "symbolId")]
    pub result: f64,
    #[serde(default)]
    pub delay: f64,
}

impl From<SpinResponseDto> for ProviderReply {
    fn from(dto: SpinResponseDto) -> Self {
        Self {
            // Float to int casts saturate at the i64 bounds.
            symbol_index: dto.result.round() as i64,
            delay_seconds: dto.delay,
        }
    }
}
