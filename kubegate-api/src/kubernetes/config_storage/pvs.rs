//! PersistentVolume operations
//!
//! PVs are cluster-scoped; there is no namespace dimension here.

use k8s_openapi::api::core::v1::PersistentVolume;
use kube::api::{DeleteParams, ListParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List persistent volumes, filtered, sorted and paginated
pub async fn list_pvs(
    client: &KubeClient,
    query: &ListQuery,
) -> K8sResult<ResourceList<PersistentVolume>> {
    let volumes = client
        .cluster::<PersistentVolume>()
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list persistent volumes", e))?;

    Ok(selector::select(volumes.items, query))
}

/// Get a single persistent volume
pub async fn get_pv(client: &KubeClient, name: &str) -> K8sResult<PersistentVolume> {
    client
        .cluster::<PersistentVolume>()
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get persistent volume", e))
}

/// Delete a persistent volume
pub async fn delete_pv(client: &KubeClient, name: &str) -> K8sResult<()> {
    client
        .cluster::<PersistentVolume>()
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete persistent volume", e))?;

    Ok(())
}
