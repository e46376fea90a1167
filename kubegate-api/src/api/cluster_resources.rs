//! Cluster-scoped resource routes and handlers

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use k8s_openapi::api::core::v1::{Namespace, Node};

use crate::error::{ApiError, ApiResponse};
use crate::kubernetes::cluster_resources::{namespaces, nodes};
use crate::kubernetes::selector::{ListQuery, ResourceList};
use crate::state::AppState;

/// Build cluster-scoped resource routes (namespaces, nodes)
pub fn routes() -> Router<AppState> {
    Router::new()
        // Namespaces
        .route("/api/k8s/namespaces", get(list_namespaces))
        .route(
            "/api/k8s/namespaces/:namespace",
            get(get_namespace).delete(delete_namespace),
        )
        // Nodes
        .route("/api/k8s/nodes", get(list_nodes))
        .route("/api/k8s/nodes/:name", get(get_node).put(update_node))
}

// Namespace handlers

async fn list_namespaces(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<Namespace>>>, ApiError> {
    let list = namespaces::list_namespaces(&state.kube, &query).await?;
    Ok(ApiResponse::ok("namespace list fetched", list))
}

async fn get_namespace(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
) -> Result<Json<ApiResponse<Namespace>>, ApiError> {
    let ns = namespaces::get_namespace(&state.kube, &namespace).await?;
    Ok(ApiResponse::ok("namespace detail fetched", ns))
}

async fn delete_namespace(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    namespaces::delete_namespace(&state.kube, &namespace).await?;
    Ok(ApiResponse::msg_only("namespace deleted"))
}

// Node handlers

async fn list_nodes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<Node>>>, ApiError> {
    let list = nodes::list_nodes(&state.kube, &query).await?;
    Ok(ApiResponse::ok("node list fetched", list))
}

async fn get_node(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<Node>>, ApiError> {
    let node = nodes::get_node(&state.kube, &name).await?;
    Ok(ApiResponse::ok("node detail fetched", node))
}

async fn update_node(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<Node>>, ApiError> {
    let node = nodes::update_node(&state.kube, &name, manifest).await?;
    Ok(ApiResponse::ok("node updated", node))
}
