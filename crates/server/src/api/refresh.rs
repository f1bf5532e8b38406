use std::{sync::Arc, time::Duration};

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use screener::{
    lists::{self, Lists},
    repository::{RefreshStats, Repository},
};
use tracing::{error, info};

use crate::state::AppState;

/// A refresh that has not installed new indexes by this deadline is
/// abandoned and the previous indexes stay live.
pub const REFRESH_TIMEOUT: Duration = Duration::from_secs(30 * 60);

#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error("refresh timed out")]
    Timeout,
    #[error(transparent)]
    Lists(#[from] lists::Error),
}

/// Admin endpoint: rebuild the indexes out of band and report the counts.
pub async fn refresh(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    info!("admin: refreshing sanctions lists");
    match refresh_data(&state).await {
        Ok(stats) => Ok(Json(stats).into_response()),
        Err(err) => {
            error!("admin: problem refreshing sanctions lists: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Downloads every source list, rebuilds the indexes and swaps them in.
///
/// One refresh runs at a time. A caller that was waiting on the guard
/// while another refresh completed reuses that result instead of
/// downloading the lists again. On any failure (a list that will not
/// download or parse, or the overall deadline expiring) the previous
/// indexes remain untouched.
pub async fn refresh_data(state: &AppState) -> Result<RefreshStats, RefreshError> {
    let requested_at = Utc::now();
    let _guard = state.refresh_guard.lock().await;
    {
        let repository = state.repository.read().await;
        if repository
            .last_refreshed_at()
            .is_some_and(|at| at > requested_at)
        {
            return Ok(repository.stats());
        }
    }

    let repository = tokio::time::timeout(REFRESH_TIMEOUT, async {
        let bundle = Lists::download(&state.client, &state.config).await?;
        Ok::<_, lists::Error>(Repository::new().load_lists(bundle))
    })
    .await
    .map_err(|_| RefreshError::Timeout)??;

    let stats = repository.stats();
    *state.repository.write().await = repository;
    info!(
        "refreshed sanctions lists - SDNs={} AltNames={} Addresses={} DeniedPersons={} SectoralSanctions={} BISEntities={}",
        stats.sdns,
        stats.alt_names,
        stats.addresses,
        stats.denied_persons,
        stats.sectoral_sanctions,
        stats.bis_entities,
    );
    Ok(stats)
}
