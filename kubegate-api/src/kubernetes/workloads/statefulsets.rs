//! StatefulSet operations

use k8s_openapi::api::apps::v1::StatefulSet;
use kube::api::{DeleteParams, ListParams, PostParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List statefulsets in a namespace (or cluster-wide), filtered, sorted and
/// paginated
pub async fn list_statefulsets(
    client: &KubeClient,
    namespace: Option<&str>,
    query: &ListQuery,
) -> K8sResult<ResourceList<StatefulSet>> {
    let statefulsets = client
        .namespaced::<StatefulSet>(namespace)
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list statefulsets", e))?;

    Ok(selector::select(statefulsets.items, query))
}

/// Get a single statefulset
pub async fn get_statefulset(
    client: &KubeClient,
    namespace: &str,
    name: &str,
) -> K8sResult<StatefulSet> {
    client
        .namespaced::<StatefulSet>(Some(namespace))
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get statefulset", e))
}

/// Delete a statefulset
pub async fn delete_statefulset(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    client
        .namespaced::<StatefulSet>(Some(namespace))
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete statefulset", e))?;

    Ok(())
}

/// Replace a statefulset from a full JSON manifest
pub async fn update_statefulset(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<StatefulSet> {
    let statefulset: StatefulSet = serde_json::from_value(manifest)?;

    client
        .namespaced::<StatefulSet>(Some(namespace))
        .replace(name, &PostParams::default(), &statefulset)
        .await
        .map_err(|e| K8sError::api("failed to update statefulset", e))
}
