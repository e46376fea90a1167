//! PersistentVolumeClaim operations

use k8s_openapi::api::core::v1::PersistentVolumeClaim;
use kube::api::{DeleteParams, ListParams, PostParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List claims in a namespace (or cluster-wide), filtered, sorted and
/// paginated
pub async fn list_pvcs(
    client: &KubeClient,
    namespace: Option<&str>,
    query: &ListQuery,
) -> K8sResult<ResourceList<PersistentVolumeClaim>> {
    let claims = client
        .namespaced::<PersistentVolumeClaim>(namespace)
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list persistent volume claims", e))?;

    Ok(selector::select(claims.items, query))
}

/// Get a single claim
pub async fn get_pvc(
    client: &KubeClient,
    namespace: &str,
    name: &str,
) -> K8sResult<PersistentVolumeClaim> {
    client
        .namespaced::<PersistentVolumeClaim>(Some(namespace))
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get persistent volume claim", e))
}

/// Delete a claim
pub async fn delete_pvc(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    client
        .namespaced::<PersistentVolumeClaim>(Some(namespace))
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete persistent volume claim", e))?;

    Ok(())
}

/// Replace a claim from a full JSON manifest
pub async fn update_pvc(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<PersistentVolumeClaim> {
    let claim: PersistentVolumeClaim = serde_json::from_value(manifest)?;

    client
        .namespaced::<PersistentVolumeClaim>(Some(namespace))
        .replace(name, &PostParams::default(), &claim)
        .await
        .map_err(|e| K8sError::api("failed to update persistent volume claim", e))
}
