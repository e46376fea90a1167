//! Secret operations

use k8s_openapi::api::core::v1::Secret;
use kube::api::{DeleteParams, ListParams, PostParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List secrets in a namespace (or cluster-wide), filtered, sorted and
/// paginated
pub async fn list_secrets(
    client: &KubeClient,
    namespace: Option<&str>,
    query: &ListQuery,
) -> K8sResult<ResourceList<Secret>> {
    let secrets = client
        .namespaced::<Secret>(namespace)
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list secrets", e))?;

    Ok(selector::select(secrets.items, query))
}

/// Get a single secret
pub async fn get_secret(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<Secret> {
    client
        .namespaced::<Secret>(Some(namespace))
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get secret", e))
}

/// Delete a secret
pub async fn delete_secret(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    client
        .namespaced::<Secret>(Some(namespace))
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete secret", e))?;

    Ok(())
}

/// Replace a secret from a full JSON manifest
pub async fn update_secret(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<Secret> {
    let secret: Secret = serde_json::from_value(manifest)?;

    client
        .namespaced::<Secret>(Some(namespace))
        .replace(name, &PostParams::default(), &secret)
        .await
        .map_err(|e| K8sError::api("failed to update secret", e))
}
