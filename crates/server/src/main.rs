//! Sanctions-screening search server.
//!
//! Downloads the SDN, Denied Persons, Sectoral Sanctions and Entity
//! lists, indexes them in memory, and serves fuzzy `GET /search` queries
//! plus a `GET /ofac/refresh` admin trigger. The indexes are rebuilt on a
//! timer and swapped in wholesale; queries keep running against the
//! previous generation while a rebuild is in flight.

mod api;
mod dto;
mod state;

use std::{env, sync::Arc, time::Duration};

use anyhow::Context as _;
use axum::{Router, routing::get};
use screener::lists::Config;
use state::AppState;
use tokio::net::TcpListener;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

/// Lists rarely change more than once a day upstream.
const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(12 * 60 * 60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let state = Arc::new(AppState::new(Config::from_env()));

    // First fill. Until it lands, /search answers from empty indexes.
    if let Err(err) = api::refresh::refresh_data(&state).await {
        error!("initial list download failed, serving empty indexes: {err}");
    }
    spawn_refresh_task(state.clone());

    let app = Router::new()
        .route("/search", get(api::search::search))
        .route("/ofac/refresh", get(api::refresh::refresh))
        .with_state(state);

    let address = env::var("HTTP_BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8084".into());
    info!("listening on http://{address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn spawn_refresh_task(state: Arc<AppState>) {
    let interval = env::var("DATA_REFRESH_INTERVAL_SECONDS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_REFRESH_INTERVAL);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately and the startup refresh
        // already covered it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match api::refresh::refresh_data(&state).await {
                Ok(stats) => info!(
                    "scheduled refresh finished - SDNs={} AltNames={} Addresses={} DeniedPersons={} SectoralSanctions={} BISEntities={}",
                    stats.sdns,
                    stats.alt_names,
                    stats.addresses,
                    stats.denied_persons,
                    stats.sectoral_sanctions,
                    stats.bis_entities,
                ),
                Err(err) => error!("scheduled refresh failed: {err}"),
            }
        }
    });
}
