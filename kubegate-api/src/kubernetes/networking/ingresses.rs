//! Ingress operations

use k8s_openapi::api::networking::v1::Ingress;
use kube::api::{DeleteParams, ListParams, PostParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List ingresses in a namespace (or cluster-wide), filtered, sorted and
/// paginated
pub async fn list_ingresses(
    client: &KubeClient,
    namespace: Option<&str>,
    query: &ListQuery,
) -> K8sResult<ResourceList<Ingress>> {
    let ingresses = client
        .namespaced::<Ingress>(namespace)
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list ingresses", e))?;

    Ok(selector::select(ingresses.items, query))
}

/// Get a single ingress
pub async fn get_ingress(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<Ingress> {
    client
        .namespaced::<Ingress>(Some(namespace))
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get ingress", e))
}

/// Delete an ingress
pub async fn delete_ingress(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    client
        .namespaced::<Ingress>(Some(namespace))
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete ingress", e))?;

    Ok(())
}

/// Replace an ingress from a full JSON manifest
pub async fn update_ingress(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<Ingress> {
    let ingress: Ingress = serde_json::from_value(manifest)?;

    client
        .namespaced::<Ingress>(Some(namespace))
        .replace(name, &PostParams::default(), &ingress)
        .await
        .map_err(|e| K8sError::api("failed to update ingress", e))
}
