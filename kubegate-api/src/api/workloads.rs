//! Workload routes and handlers

use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, StatefulSet};
use k8s_openapi::api::core::v1::Pod;
use serde::Deserialize;

use crate::error::{ApiError, ApiResponse};
use crate::kubernetes::selector::{ListQuery, ResourceList};
use crate::kubernetes::workloads::{daemonsets, deployments, pods, statefulsets};
use crate::state::AppState;

/// Build workload routes (pods, deployments, statefulsets, daemonsets)
pub fn routes() -> Router<AppState> {
    Router::new()
        // Pods
        .route("/api/k8s/pods", get(list_pods))
        .route("/api/k8s/pods/counts", get(pod_counts))
        .route("/api/k8s/namespaces/:namespace/pods", get(list_pods))
        .route(
            "/api/k8s/namespaces/:namespace/pods/:name",
            get(get_pod).put(update_pod).delete(delete_pod),
        )
        .route(
            "/api/k8s/namespaces/:namespace/pods/:name/logs",
            get(pod_logs),
        )
        .route(
            "/api/k8s/namespaces/:namespace/pods/:name/containers",
            get(pod_containers),
        )
        // Deployments
        .route("/api/k8s/deployments", get(list_deployments))
        .route("/api/k8s/deployments/counts", get(deployment_counts))
        .route(
            "/api/k8s/namespaces/:namespace/deployments",
            get(list_deployments).post(create_deployment),
        )
        .route(
            "/api/k8s/namespaces/:namespace/deployments/:name",
            get(get_deployment)
                .put(update_deployment)
                .delete(delete_deployment),
        )
        .route(
            "/api/k8s/namespaces/:namespace/deployments/:name/scale",
            put(scale_deployment),
        )
        .route(
            "/api/k8s/namespaces/:namespace/deployments/:name/restart",
            post(restart_deployment),
        )
        // StatefulSets
        .route("/api/k8s/statefulsets", get(list_statefulsets))
        .route(
            "/api/k8s/namespaces/:namespace/statefulsets",
            get(list_statefulsets),
        )
        .route(
            "/api/k8s/namespaces/:namespace/statefulsets/:name",
            get(get_statefulset)
                .put(update_statefulset)
                .delete(delete_statefulset),
        )
        // DaemonSets
        .route("/api/k8s/daemonsets", get(list_daemonsets))
        .route(
            "/api/k8s/namespaces/:namespace/daemonsets",
            get(list_daemonsets),
        )
        .route(
            "/api/k8s/namespaces/:namespace/daemonsets/:name",
            get(get_daemonset)
                .put(update_daemonset)
                .delete(delete_daemonset),
        )
}

// Pod handlers

async fn list_pods(
    State(state): State<AppState>,
    namespace: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<Pod>>>, ApiError> {
    let namespace = namespace.map(|Path(ns)| ns);
    let list = pods::list_pods(&state.kube, namespace.as_deref(), &query).await?;
    Ok(ApiResponse::ok("pod list fetched", list))
}

async fn get_pod(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Pod>>, ApiError> {
    let pod = pods::get_pod(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("pod detail fetched", pod))
}

async fn delete_pod(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    pods::delete_pod(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("pod deleted"))
}

async fn update_pod(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<Pod>>, ApiError> {
    let pod = pods::update_pod(&state.kube, &namespace, &name, manifest).await?;
    Ok(ApiResponse::ok("pod updated", pod))
}

#[derive(Deserialize)]
struct PodLogQuery {
    container: Option<String>,
}

async fn pod_logs(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Query(query): Query<PodLogQuery>,
) -> Result<Json<ApiResponse<String>>, ApiError> {
    let logs = pods::get_pod_logs(
        &state.kube,
        &namespace,
        &name,
        query.container.as_deref(),
        state.config.pod_logs.tail_lines,
    )
    .await?;
    Ok(ApiResponse::ok("pod logs fetched", logs))
}

async fn pod_containers(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<String>>>, ApiError> {
    let containers = pods::get_pod_containers(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("pod containers fetched", containers))
}

async fn pod_counts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<pods::NamespacePodCount>>>, ApiError> {
    let counts = pods::count_pods_per_namespace(&state.kube).await?;
    Ok(ApiResponse::ok("pod counts fetched", counts))
}

// Deployment handlers

async fn list_deployments(
    State(state): State<AppState>,
    namespace: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<Deployment>>>, ApiError> {
    let namespace = namespace.map(|Path(ns)| ns);
    let list = deployments::list_deployments(&state.kube, namespace.as_deref(), &query).await?;
    Ok(ApiResponse::ok("deployment list fetched", list))
}

async fn get_deployment(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Deployment>>, ApiError> {
    let deployment = deployments::get_deployment(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("deployment detail fetched", deployment))
}

async fn delete_deployment(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    deployments::delete_deployment(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("deployment deleted"))
}

async fn update_deployment(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<Deployment>>, ApiError> {
    let deployment =
        deployments::update_deployment(&state.kube, &namespace, &name, manifest).await?;
    Ok(ApiResponse::ok("deployment updated", deployment))
}

async fn create_deployment(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
    Json(request): Json<deployments::DeploymentCreate>,
) -> Result<Json<ApiResponse<Deployment>>, ApiError> {
    let deployment = deployments::create_deployment(&state.kube, &namespace, &request).await?;
    Ok(ApiResponse::ok("deployment created", deployment))
}

#[derive(Deserialize)]
struct ScaleRequest {
    replicas: i32,
}

async fn scale_deployment(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(request): Json<ScaleRequest>,
) -> Result<Json<ApiResponse<i32>>, ApiError> {
    let replicas =
        deployments::scale_deployment(&state.kube, &namespace, &name, request.replicas).await?;
    Ok(ApiResponse::ok("deployment scaled", replicas))
}

async fn restart_deployment(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    deployments::restart_deployment(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("deployment restarted"))
}

async fn deployment_counts(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<deployments::NamespaceDeploymentCount>>>, ApiError> {
    let counts = deployments::count_deployments_per_namespace(&state.kube).await?;
    Ok(ApiResponse::ok("deployment counts fetched", counts))
}

// StatefulSet handlers

async fn list_statefulsets(
    State(state): State<AppState>,
    namespace: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<StatefulSet>>>, ApiError> {
    let namespace = namespace.map(|Path(ns)| ns);
    let list = statefulsets::list_statefulsets(&state.kube, namespace.as_deref(), &query).await?;
    Ok(ApiResponse::ok("statefulset list fetched", list))
}

async fn get_statefulset(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<StatefulSet>>, ApiError> {
    let statefulset = statefulsets::get_statefulset(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("statefulset detail fetched", statefulset))
}

async fn delete_statefulset(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    statefulsets::delete_statefulset(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("statefulset deleted"))
}

async fn update_statefulset(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<StatefulSet>>, ApiError> {
    let statefulset =
        statefulsets::update_statefulset(&state.kube, &namespace, &name, manifest).await?;
    Ok(ApiResponse::ok("statefulset updated", statefulset))
}

// DaemonSet handlers

async fn list_daemonsets(
    State(state): State<AppState>,
    namespace: Option<Path<String>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ResourceList<DaemonSet>>>, ApiError> {
    let namespace = namespace.map(|Path(ns)| ns);
    let list = daemonsets::list_daemonsets(&state.kube, namespace.as_deref(), &query).await?;
    Ok(ApiResponse::ok("daemonset list fetched", list))
}

async fn get_daemonset(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<DaemonSet>>, ApiError> {
    let daemonset = daemonsets::get_daemonset(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::ok("daemonset detail fetched", daemonset))
}

async fn delete_daemonset(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    daemonsets::delete_daemonset(&state.kube, &namespace, &name).await?;
    Ok(ApiResponse::msg_only("daemonset deleted"))
}

async fn update_daemonset(
    State(state): State<AppState>,
    Path((namespace, name)): Path<(String, String)>,
    Json(manifest): Json<serde_json::Value>,
) -> Result<Json<ApiResponse<DaemonSet>>, ApiError> {
    let daemonset = daemonsets::update_daemonset(&state.kube, &namespace, &name, manifest).await?;
    Ok(ApiResponse::ok("daemonset updated", daemonset))
}
