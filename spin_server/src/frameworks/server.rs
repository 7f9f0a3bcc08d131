// Framework bootstrap for the spin server runtime.

use crate::domain::SpinSettings;
use crate::frameworks::config;
use crate::interface_adapters::rng::ThreadRandom;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use std::io::Result;
use std::net::SocketAddr;
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

pub async fn run(listener: tokio::net::TcpListener, settings: SpinSettings) -> Result<()> {
    let address = listener.local_addr()?;

    let state = Arc::new(AppState {
        random: Arc::new(ThreadRandom),
        settings,
    });

    // Wire the HTTP routes for the spin API.
    let app = routes::app(state);

    tracing::info!(
        %address,
        symbol_count = settings.symbol_count,
        min_delay_seconds = settings.min_delay_seconds,
        max_delay_seconds = settings.max_delay_seconds,
        "listening"
    );

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let settings = config::spin_settings().map_err(|e| {
        tracing::error!(error = %e, "invalid spin settings");
        std::io::Error::other(e)
    })?;

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, settings).await
}
