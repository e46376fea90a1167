//! Pod operations
//!
//! Listing through the selection pipeline, pass-through CRUD, logs and
//! container lookup.

use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::api::{DeleteParams, ListParams, LogParams, PostParams};
use serde::Serialize;

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// Pod count for one namespace
#[derive(Debug, Clone, Serialize)]
pub struct NamespacePodCount {
    pub namespace: String,
    pub pod_num: usize,
}

/// List pods in a namespace (or cluster-wide), filtered, sorted and paginated
pub async fn list_pods(
    client: &KubeClient,
    namespace: Option<&str>,
    query: &ListQuery,
) -> K8sResult<ResourceList<Pod>> {
    let pods = client
        .namespaced::<Pod>(namespace)
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list pods", e))?;

    Ok(selector::select(pods.items, query))
}

/// Get a single pod
pub async fn get_pod(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<Pod> {
    client
        .namespaced::<Pod>(Some(namespace))
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get pod", e))
}

/// Delete a pod
pub async fn delete_pod(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    client
        .namespaced::<Pod>(Some(namespace))
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete pod", e))?;

    Ok(())
}

/// Replace a pod from a full JSON manifest
pub async fn update_pod(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<Pod> {
    let pod: Pod = serde_json::from_value(manifest)?;

    client
        .namespaced::<Pod>(Some(namespace))
        .replace(name, &PostParams::default(), &pod)
        .await
        .map_err(|e| K8sError::api("failed to update pod", e))
}

/// Get pod logs for one container, limited to the last `tail_lines` lines
pub async fn get_pod_logs(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    container: Option<&str>,
    tail_lines: i64,
) -> K8sResult<String> {
    let params = LogParams {
        container: container.map(String::from),
        tail_lines: Some(tail_lines),
        ..Default::default()
    };

    client
        .namespaced::<Pod>(Some(namespace))
        .logs(name, &params)
        .await
        .map_err(|e| K8sError::api("failed to get pod logs", e))
}

/// Names of the containers in a pod, for the log and terminal views
pub async fn get_pod_containers(
    client: &KubeClient,
    namespace: &str,
    name: &str,
) -> K8sResult<Vec<String>> {
    let pod = get_pod(client, namespace, name).await?;

    Ok(pod
        .spec
        .map(|spec| spec.containers.into_iter().map(|c| c.name).collect())
        .unwrap_or_default())
}

/// Count pods in every namespace
pub async fn count_pods_per_namespace(client: &KubeClient) -> K8sResult<Vec<NamespacePodCount>> {
    let namespaces = client
        .cluster::<Namespace>()
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list namespaces", e))?;

    let mut counts = Vec::with_capacity(namespaces.items.len());
    for ns in namespaces.items {
        let namespace = ns.metadata.name.unwrap_or_default();
        let pods = client
            .namespaced::<Pod>(Some(&namespace))
            .list(&ListParams::default())
            .await
            .map_err(|e| K8sError::api("failed to list pods", e))?;

        counts.push(NamespacePodCount {
            namespace,
            pod_num: pods.items.len(),
        });
    }

    Ok(counts)
}
