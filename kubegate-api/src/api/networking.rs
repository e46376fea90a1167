//! Networking routes and handlers

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::api::networking::v1::Ingress;

use crate::error::{ApiError, ApiResponse};
use crate::kubernetes::networking::{ingresses, services};
use crate::kubernetes::selector::{ListQuery, ResourceList};
use crate::state::AppState;

/// Build networking routes (services, ingresses)
pub fn routes() -> Router<AppState> {
    Router::new()
        // Services
        .route("/api/k8s/services", get(list_services))
        .route("/api/k8s/namespaces/:namespace/services", get(list_services))
        .route(
            "/api/k8s/namespaces/:namespace/services/:name",
            get(get_service).put(update_service).delete(delete_service),
        )
        // Ingresses
        .route("/api/k8s/ingresses", get(list_ingresses))
        .route(
            "/api/k8s/namespaces/:namespace/ingresses",
            get(list_ingresses),
        )
        .route(
            "/api/k8s/namespaces/:namespace/ingresses/:name",
            get(get_ingress).put(update_ingress).delete(delete_ingress),
        )
}

// Service handlers

async fn list_services(
    State(state): State<AppState>,
    namespace: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<Service>>>, ApiError> {
    let namespace = namespace.map(|Path(ns)| ns);
    let list = services::list_services(&state.kube, namespace.as_deref(), &query).await?;
    Ok(ApiResponse::ok("service list fetched", list))
}

async fn get_service(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Service>>, ApiError> {
    let service = services::get_service(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("service detail fetched", service))
}

async fn delete_service(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    services::delete_service(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("service deleted"))
}

async fn update_service(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<Service>>, ApiError> {
    let service = services::update_service(&state.kube, &namespace, &name, manifest).await?;
    Ok(ApiResponse::ok("service updated", service))
}

// Ingress handlers

async fn list_ingresses(
    State(state): State<AppState>,
    namespace: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<Ingress>>>, ApiError> {
    let namespace = namespace.map(|Path(ns)| ns);
    let list = ingresses::list_ingresses(&state.kube, namespace.as_deref(), &query).await?;
    Ok(ApiResponse::ok("ingress list fetched", list))
}

async fn get_ingress(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Ingress>>, ApiError> {
    let ingress = ingresses::get_ingress(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("ingress detail fetched", ingress))
}

async fn delete_ingress(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    ingresses::delete_ingress(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("ingress deleted"))
}

async fn update_ingress(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<Ingress>>, ApiError> {
    let ingress = ingresses::update_ingress(&state.kube, &namespace, &name, manifest).await?;
    Ok(ApiResponse::ok("ingress updated", ingress))
}
