// Framework bootstrap for the headless reel client.

use crate::domain::{GameState, Phase, SpinOutcome};
use crate::frameworks::config;
use crate::frameworks::session::{GameSession, SessionSettings};
use crate::interface_adapters::assets;
use crate::interface_adapters::clients::spin::HttpOutcomeProvider;
use crate::interface_adapters::shell::render;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Result;
use std::sync::Arc;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Plays `spins` rounds on `session`, logging what the shell shows at
/// each reveal. Returns the outcome revealed in each round.
pub async fn play(session: &GameSession, spins: u32) -> Result<Vec<SpinOutcome>> {
    let mut state_rx = session.subscribe();
    let mut revealed = Vec::with_capacity(spins as usize);

    for round in 1..=spins {
        state_rx
            .wait_for(|state| state.phase == Phase::Idle)
            .await
            .map_err(std::io::Error::other)?;
        if !session.press_spin().await {
            return Err(std::io::Error::other("spin controller stopped"));
        }

        let state = GameState::clone(
            &*state_rx
                .wait_for(|state| state.phase == Phase::Revealing)
                .await
                .map_err(std::io::Error::other)?,
        );
        let view = render(&state);
        tracing::info!(
            round,
            symbol = ?state.revealed_symbol_id.map(|s| s.index()),
            source = ?state.current_outcome.as_ref().map(|o| o.source),
            popup_image = ?view.popup.as_ref().and_then(|p| p.image),
            error = ?state.last_error,
            rendered = session.frame().is_some(),
            "spin revealed"
        );
        revealed.extend(state.current_outcome);
    }

    state_rx
        .wait_for(|state| state.phase == Phase::Idle)
        .await
        .map_err(std::io::Error::other)?;
    Ok(revealed)
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let tuning = config::reel_tuning().map_err(|e| {
        tracing::error!(error = %e, "invalid reel tuning");
        std::io::Error::other(e)
    })?;

    let base_url = config::spin_service_url();
    let timeout = config::request_timeout();
    let provider = HttpOutcomeProvider::new(base_url.clone(), timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize spin client: {e}")))?;
    tracing::debug!(
        %base_url,
        timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        "spin client configured"
    );

    let atlas = assets::load_or_degrade(&config::asset_dir(), tuning.symbol_count).await;

    let session = GameSession::start(
        SessionSettings {
            tuning,
            frame_interval: config::FRAME_INTERVAL,
            intent_channel_capacity: config::INTENT_CHANNEL_CAPACITY,
        },
        Arc::new(provider),
        atlas,
        StdRng::from_os_rng(),
    );

    let spins = config::spin_count();
    tracing::info!(spins, "session started");
    let played = play(&session, spins).await;
    session.shutdown().await;

    let revealed = played.inspect_err(|e| {
        tracing::error!(error = %e, "session ended early");
    })?;
    tracing::info!(rounds = revealed.len(), "session finished");
    Ok(())
}
