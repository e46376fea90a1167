//! Node operations

use k8s_openapi::api::core::v1::Node;
use kube::api::{ListParams, PostParams};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// List nodes, filtered, sorted and paginated
pub async fn list_nodes(client: &KubeClient, query: &ListQuery) -> K8sResult<ResourceList<Node>> {
    let nodes = client
        .cluster::<Node>()
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list nodes", e))?;

    Ok(selector::select(nodes.items, query))
}

/// Get a single node
pub async fn get_node(client: &KubeClient, name: &str) -> K8sResult<Node> {
    client
        .cluster::<Node>()
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get node", e))
}

/// Replace a node from a full JSON manifest (labels, taints, schedulability)
pub async fn update_node(
    client: &KubeClient,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<Node> {
    let node: Node = serde_json::from_value(manifest)?;

    client
        .cluster::<Node>()
        .replace(name, &PostParams::default(), &node)
        .await
        .map_err(|e| K8sError::api("failed to update node", e))
}
