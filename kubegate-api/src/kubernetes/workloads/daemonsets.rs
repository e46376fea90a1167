//! DaemonSet operations

use k8s_openapi::api::apps::v1::DaemonSet;
use kube::api::{DeleteParams, ListParams, PostParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List daemonsets in a namespace (or cluster-wide), filtered, sorted and
/// paginated
pub async fn list_daemonsets(
    client: &KubeClient,
    namespace: Option<&str>,
    query: &ListQuery,
) -> K8sResult<ResourceList<DaemonSet>> {
    let daemonsets = client
        .namespaced::<DaemonSet>(namespace)
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list daemonsets", e))?;

    Ok(selector::select(daemonsets.items, query))
}

/// Get a single daemonset
pub async fn get_daemonset(
    client: &KubeClient,
    namespace: &str,
    name: &str,
) -> K8sResult<DaemonSet> {
    client
        .namespaced::<DaemonSet>(Some(namespace))
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get daemonset", e))
}

/// Delete a daemonset
pub async fn delete_daemonset(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    client
        .namespaced::<DaemonSet>(Some(namespace))
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete daemonset", e))?;

    Ok(())
}

/// Replace a daemonset from a full JSON manifest
pub async fn update_daemonset(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<DaemonSet> {
    let daemonset: DaemonSet = serde_json::from_value(manifest)?;

    client
        .namespaced::<DaemonSet>(Some(namespace))
        .replace(name, &PostParams::default(), &daemonset)
        .await
        .map_err(|e| K8sError::api("failed to update daemonset", e))
}
