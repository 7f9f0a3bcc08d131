mod support;

use axum::{Json, Router, routing::get};
use rand::SeedableRng;
use rand::rngs::StdRng;
use reel_client::domain::{OutcomeSource, Phase, SymbolId};
use reel_client::{GameSession, HttpOutcomeProvider, ReelTuning, SessionSettings, play};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn quick_settings() -> SessionSettings {
    SessionSettings {
        tuning: ReelTuning {
            animation_duration: Duration::from_millis(200),
            reveal_delay: Duration::from_millis(500),
            ..ReelTuning::default()
        },
        frame_interval: Duration::from_millis(10),
        intent_channel_capacity: 8,
    }
}

fn start(base_url: String) -> GameSession {
    let provider =
        HttpOutcomeProvider::new(base_url, Duration::from_secs(2)).expect("build client");
    GameSession::start(
        quick_settings(),
        Arc::new(provider),
        None,
        StdRng::seed_from_u64(3),
    )
}

#[tokio::test]
async fn when_spinning_against_the_spin_server_then_rounds_complete_back_to_idle() {
    let session = start(support::ensure_spin_server().to_string());

    let revealed = play(&session, 3).await.expect("rounds complete");

    assert_eq!(revealed.len(), 3);
    for outcome in &revealed {
        assert_eq!(outcome.source, OutcomeSource::Server);
        assert!(outcome.symbol_id.index() < 8);
    }
    let sequences: Vec<u64> = revealed.iter().map(|o| o.sequence.value()).collect();
    assert_eq!(sequences, vec![1, 2, 3]);

    let state = session.snapshot();
    assert_eq!(state.phase, Phase::Idle);
    assert_eq!(state.current_outcome, None);
    assert_eq!(state.revealed_symbol_id, None);
    assert_eq!(state.last_error, None);
    assert!(session.view().spin_button.enabled);

    session.shutdown().await;
}

#[tokio::test]
async fn when_server_sends_an_out_of_range_symbol_then_the_last_symbol_is_revealed() {
    let app = Router::new().route(
        "/api/spin",
        get(|| async { Json(json!({ "result": 13, "delay": 0 })) }),
    );
    let session = start(support::serve_stub(app).await);
    let mut state_rx = session.subscribe();

    assert!(session.press_spin().await);
    state_rx
        .wait_for(|state| state.phase == Phase::Revealing)
        .await
        .expect("controller running");

    let popup = session.view().popup.expect("popup visible");
    assert_eq!(popup.symbol_id, SymbolId::new(7));
    assert_eq!(popup.image, Some("symbols/symbo8.png"));

    session.shutdown().await;
}

#[tokio::test]
async fn when_spin_service_is_down_then_a_fallback_symbol_is_revealed() {
    let session = start(support::closed_url().await);
    let mut state_rx = session.subscribe();

    assert!(session.press_spin().await);
    state_rx
        .wait_for(|state| state.phase == Phase::Revealing)
        .await
        .expect("controller running");

    let state = session.snapshot();
    let outcome = state.current_outcome.expect("fallback outcome");
    assert_eq!(outcome.source, OutcomeSource::Fallback);
    assert!(state.last_error.is_some());

    session.shutdown().await;
}
