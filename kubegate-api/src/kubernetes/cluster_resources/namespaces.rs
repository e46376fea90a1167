//! Namespace operations

use k8s_openapi::api::core::v1::Namespace;
use kube::api::{DeleteParams, ListParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List namespaces, filtered, sorted and paginated
pub async fn list_namespaces(
    client: &KubeClient,
    query: &ListQuery,
) -> K8sResult<ResourceList<Namespace>> {
    let namespaces = client
        .cluster::<Namespace>()
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list namespaces", e))?;

    Ok(selector::select(namespaces.items, query))
}

/// Get a single namespace
pub async fn get_namespace(client: &KubeClient, name: &str) -> K8sResult<Namespace> {
    client
        .cluster::<Namespace>()
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get namespace", e))
}

/// Delete a namespace
pub async fn delete_namespace(client: &KubeClient, name: &str) -> K8sResult<()> {
    client
        .cluster::<Namespace>()
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete namespace", e))?;

    Ok(())
}
