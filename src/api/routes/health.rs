//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;
use crate::model::EntityKind;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// The store is built before the listener binds, so a running server is
/// always ready. An empty store is still a valid store.
pub async fn readiness(State(_state): State<Arc<AppState>>) -> StatusCode {
    StatusCode::OK
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let records: usize = EntityKind::all()
        .iter()
        .map(|kind| state.store.len(*kind))
        .sum();

    let status = if records == 0 { "empty" } else { "healthy" };

    Json(HealthResponse {
        status: status.to_string(),
        records,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::store::Store;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_full_health_counts_records() {
        let state = Arc::new(AppState::new(Store::seeded(1), ServerConfig::default()));
        let Json(health) = full_health(State(state.clone())).await;

        assert_eq!(health.status, "healthy");
        assert_eq!(
            health.records,
            state.store.users.len()
                + state.store.teams.len()
                + state.store.activities.len()
                + state.store.leaderboard.len()
                + state.store.workouts.len()
        );

        let empty = Arc::new(AppState::new(Store::empty(), ServerConfig::default()));
        let Json(health) = full_health(State(empty)).await;
        assert_eq!(health.status, "empty");
        assert_eq!(health.records, 0);
    }
}
