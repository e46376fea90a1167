//! Configuration and storage routes and handlers

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use k8s_openapi::api::core::v1::{ConfigMap, PersistentVolume, PersistentVolumeClaim, Secret};

use crate::error::{ApiError, ApiResponse};
use crate::kubernetes::config_storage::{configmaps, pvcs, pvs, secrets};
use crate::kubernetes::selector::{ListQuery, ResourceList};
use crate::state::AppState;

/// Build configuration and storage routes (configmaps, secrets, pvcs, pvs)
pub fn routes() -> Router<AppState> {
    Router::new()
        // ConfigMaps
        .route("/api/k8s/configmaps", get(list_configmaps))
        .route(
            "/api/k8s/namespaces/:namespace/configmaps",
            get(list_configmaps),
        )
        .route(
            "/api/k8s/namespaces/:namespace/configmaps/:name",
            get(get_configmap)
                .put(update_configmap)
                .delete(delete_configmap),
        )
        // Secrets
        .route("/api/k8s/secrets", get(list_secrets))
        .route("/api/k8s/namespaces/:namespace/secrets", get(list_secrets))
        .route(
            "/api/k8s/namespaces/:namespace/secrets/:name",
            get(get_secret).put(update_secret).delete(delete_secret),
        )
        // PersistentVolumeClaims
        .route("/api/k8s/pvcs", get(list_pvcs))
        .route("/api/k8s/namespaces/:namespace/pvcs", get(list_pvcs))
        .route(
            "/api/k8s/namespaces/:namespace/pvcs/:name",
            get(get_pvc).put(update_pvc).delete(delete_pvc),
        )
        // PersistentVolumes (cluster-scoped)
        .route("/api/k8s/pvs", get(list_pvs))
        .route("/api/k8s/pvs/:name", get(get_pv).delete(delete_pv))
}

// ConfigMap handlers

async fn list_configmaps(
    State(state): State<AppState>,
    namespace: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<ConfigMap>>>, ApiError> {
    let namespace = namespace.map(|Path(ns)| ns);
    let list = configmaps::list_configmaps(&state.kube, namespace.as_deref(), &query).await?;
    Ok(ApiResponse::ok("configmap list fetched", list))
}

async fn get_configmap(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ConfigMap>>, ApiError> {
    let configmap = configmaps::get_configmap(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("configmap detail fetched", configmap))
}

async fn delete_configmap(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    configmaps::delete_configmap(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("configmap deleted"))
}

async fn update_configmap(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<ConfigMap>>, ApiError> {
    let configmap = configmaps::update_configmap(&state.kube, &namespace, &name, manifest).await?;
    Ok(ApiResponse::ok("configmap updated", configmap))
}

// Secret handlers

async fn list_secrets(
    State(state): State<AppState>,
    namespace: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<Secret>>>, ApiError> {
    let namespace = namespace.map(|Path(ns)| ns);
    let list = secrets::list_secrets(&state.kube, namespace.as_deref(), &query).await?;
    Ok(ApiResponse::ok("secret list fetched", list))
}

async fn get_secret(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Secret>>, ApiError> {
    let secret = secrets::get_secret(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("secret detail fetched", secret))
}

async fn delete_secret(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    secrets::delete_secret(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("secret deleted"))
}

async fn update_secret(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<Secret>>, ApiError> {
    let secret = secrets::update_secret(&state.kube, &namespace, &name, manifest).await?;
    Ok(ApiResponse::ok("secret updated", secret))
}

// PersistentVolumeClaim handlers

async fn list_pvcs(
    State(state): State<AppState>,
    namespace: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<PersistentVolumeClaim>>>, ApiError> {
    let namespace = namespace.map(|Path(ns)| ns);
    let list = pvcs::list_pvcs(&state.kube, namespace.as_deref(), &query).await?;
    Ok(ApiResponse::ok("persistent volume claim list fetched", list))
}

async fn get_pvc(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<PersistentVolumeClaim>>, ApiError> {
    let claim = pvcs::get_pvc(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("persistent volume claim detail fetched", claim))
}

async fn delete_pvc(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    pvcs::delete_pvc(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("persistent volume claim deleted"))
}

async fn update_pvc(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<PersistentVolumeClaim>>, ApiError> {
    let claim = pvcs::update_pvc(&state.kube, &namespace, &name, manifest).await?;
    Ok(ApiResponse::ok("persistent volume claim updated", claim))
}

// PersistentVolume handlers

async fn list_pvs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<PersistentVolume>>>, ApiError> {
    let list = pvs::list_pvs(&state.kube, &query).await?;
    Ok(ApiResponse::ok("persistent volume list fetched", list))
}

async fn get_pv(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<PersistentVolume>>, ApiError> {
    let volume = pvs::get_pv(&state.kube, &name).await?;
    Ok(ApiResponse::ok("persistent volume detail fetched", volume))
}

async fn delete_pv(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    pvs::delete_pv(&state.kube, &name).await?;
    Ok(ApiResponse::msg_only("persistent volume deleted"))
}
