//! ConfigMap operations

use k8s_openapi::api::core::v1::ConfigMap;
use kube::api::{DeleteParams, ListParams, PostParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List configmaps in a namespace (or cluster-wide), filtered, sorted and
/// paginated
pub async fn list_configmaps(
    client: &KubeClient,
    namespace: Option<&str>,
    query: &ListQuery,
) -> K8sResult<ResourceList<ConfigMap>> {
    let configmaps = client
        .namespaced::<ConfigMap>(namespace)
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list configmaps", e))?;

    Ok(selector::select(configmaps.items, query))
}

/// Get a single configmap
pub async fn get_configmap(
    client: &KubeClient,
    namespace: &str,
    name: &str,
) -> K8sResult<ConfigMap> {
    client
        .namespaced::<ConfigMap>(Some(namespace))
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get configmap", e))
}

/// Delete a configmap
pub async fn delete_configmap(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    client
        .namespaced::<ConfigMap>(Some(namespace))
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete configmap", e))?;

    Ok(())
}

/// Replace a configmap from a full JSON manifest
pub async fn update_configmap(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<ConfigMap> {
    let configmap: ConfigMap = serde_json::from_value(manifest)?;

    client
        .namespaced::<ConfigMap>(Some(namespace))
        .replace(name, &PostParams::default(), &configmap)
        .await
        .map_err(|e| K8sError::api("failed to update configmap", e))
}
