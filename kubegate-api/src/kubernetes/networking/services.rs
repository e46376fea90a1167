//! Service operations

use k8s_openapi::api::core::v1::Service;
use kube::api::{DeleteParams, ListParams, PostParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List services in a namespace (or cluster-wide), filtered, sorted and
/// paginated
pub async fn list_services(
    client: &KubeClient,
    namespace: Option<&str>,
    query: &ListQuery,
) -> K8sResult<ResourceList<Service>> {
    let services = client
        .namespaced::<Service>(namespace)
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list services", e))?;

    Ok(selector::select(services.items, query))
}

/// Get a single service
pub async fn get_service(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<Service> {
    client
        .namespaced::<Service>(Some(namespace))
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get service", e))
}

/// Delete a service
pub async fn delete_service(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    client
        .namespaced::<Service>(Some(namespace))
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete service", e))?;

    Ok(())
}

/// Replace a service from a full JSON manifest
pub async fn update_service(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<Service> {
    let service: Service = serde_json::from_value(manifest)?;

    client
        .namespaced::<Service>(Some(namespace))
        .replace(name, &PostParams::default(), &service)
        .await
        .map_err(|e| K8sError::api("failed to update service", e))
}
