//! HTTP surface: route builders and handlers
//!
//! Thin glue between axum and the kubernetes services. Handlers bind
//! parameters, call one service function and wrap the result in the
//! `{msg, data}` envelope; nothing here contains resource logic.

pub mod cluster_resources;
pub mod config_storage;
pub mod networking;
pub mod workloads;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use k8s_openapi::apimachinery::pkg::version::Info;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::{ApiError, ApiResponse};
use crate::kubernetes::error::K8sError;
use crate::state::AppState;

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/k8s/version", get(version))
        .merge(workloads::routes())
        .merge(networking::routes())
        .merge(config_storage::routes())
        .merge(cluster_resources::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Simple liveness check
async fn health() -> &'static str {
    "OK"
}

/// Version of the API server this gateway fronts
async fn version(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Info>>, ApiError> {
    let info = state
        .kube
        .inner()
        .apiserver_version()
        .await
        .map_err(|e| K8sError::api("failed to read apiserver version", e))?;

    Ok(ApiResponse::ok("cluster version fetched", info))
}
