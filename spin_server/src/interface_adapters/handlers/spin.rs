use crate::interface_adapters::protocol::SpinResponse;
use crate::interface_adapters::state::AppState;
use crate::use_cases::SpinUseCase;
use axum::{Json, extract::State};
use std::sync::Arc;

// Pick a symbol, hold the response for the picked delay, then reply.
#[tracing::instrument(name = "spin", skip_all)]
pub async fn spin(State(state): State<Arc<AppState>>) -> Json<SpinResponse> {
    let use_case = SpinUseCase {
        random: state.random.clone(),
        settings: state.settings,
    };

    let draw = use_case.execute().await;
    tracing::info!(
        symbol_id = draw.symbol_id,
        delay_seconds = draw.delay_seconds,
        "spin served"
    );

    Json(SpinResponse::from(draw))
}
