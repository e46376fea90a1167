//! Deployment operations
//!
//! Listing through the selection pipeline, pass-through CRUD, plus scaling,
//! rollout restart and creation from a simplified payload.

use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, HTTPGetAction, Namespace, PodSpec, PodTemplateSpec, Probe,
    ResourceRequirements,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::{DeleteParams, ListParams, Patch, PatchParams, PostParams};
use serde::{Deserialize, Serialize};

use crate::kubernetes::client::KubeClient;
use crate::kubernetes::error::{K8sError, K8sResult};
use crate::kubernetes::selector::{self, ListQuery, ResourceList};

/// Deployment count for one namespace
#[derive(Debug, Clone, Serialize)]
pub struct NamespaceDeploymentCount {
    pub namespace: String,
    pub deployment_num: usize,
}

/// Simplified creation payload, expanded server-side into a full Deployment
#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentCreate {
    pub name: String,
    pub replicas: i32,
    pub image: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    pub cpu: String,
    pub memory: String,
    pub container_port: i32,
    #[serde(default)]
    pub health_check: bool,
    #[serde(default)]
    pub health_path: String,
}

/// List deployments in a namespace (or cluster-wide), filtered, sorted and
/// paginated
pub async fn list_deployments(
    client: &KubeClient,
    namespace: Option<&str>,
    query: &ListQuery,
) -> K8sResult<ResourceList<Deployment>> {
    let deployments = client
        .namespaced::<Deployment>(namespace)
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list deployments", e))?;

    Ok(selector::select(deployments.items, query))
}

/// Get a single deployment
pub async fn get_deployment(
    client: &KubeClient,
    namespace: &str,
    name: &str,
) -> K8sResult<Deployment> {
    client
        .namespaced::<Deployment>(Some(namespace))
        .get(name)
        .await
        .map_err(|e| K8sError::api("failed to get deployment", e))
}

/// Delete a deployment
pub async fn delete_deployment(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    client
        .namespaced::<Deployment>(Some(namespace))
        .delete(name, &DeleteParams::default())
        .await
        .map_err(|e| K8sError::api("failed to delete deployment", e))?;

    Ok(())
}

/// Replace a deployment from a full JSON manifest
pub async fn update_deployment(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    manifest: serde_json::Value,
) -> K8sResult<Deployment> {
    let deployment: Deployment = serde_json::from_value(manifest)?;

    client
        .namespaced::<Deployment>(Some(namespace))
        .replace(name, &PostParams::default(), &deployment)
        .await
        .map_err(|e| K8sError::api("failed to update deployment", e))
}

/// Set the replica count through the scale subresource, returning the new
/// count
pub async fn scale_deployment(
    client: &KubeClient,
    namespace: &str,
    name: &str,
    replicas: i32,
) -> K8sResult<i32> {
    let patch = serde_json::json!({
        "spec": {
            "replicas": replicas
        }
    });

    let scale = client
        .namespaced::<Deployment>(Some(namespace))
        .patch_scale(name, &PatchParams::default(), &Patch::Merge(&patch))
        .await
        .map_err(|e| K8sError::api("failed to scale deployment", e))?;

    Ok(scale.spec.and_then(|s| s.replicas).unwrap_or(replicas))
}

/// Trigger a rolling restart by stamping the pod template, the same
/// annotation kubectl uses
pub async fn restart_deployment(client: &KubeClient, namespace: &str, name: &str) -> K8sResult<()> {
    let now = chrono::Utc::now().to_rfc3339();
    let patch = serde_json::json!({
        "spec": {
            "template": {
                "metadata": {
                    "annotations": {
                        "kubectl.kubernetes.io/restartedAt": now
                    }
                }
            }
        }
    });

    client
        .namespaced::<Deployment>(Some(namespace))
        .patch(name, &PatchParams::default(), &Patch::Merge(&patch))
        .await
        .map_err(|e| K8sError::api("failed to restart deployment", e))?;

    Ok(())
}

/// Create a deployment from the simplified payload
pub async fn create_deployment(
    client: &KubeClient,
    namespace: &str,
    request: &DeploymentCreate,
) -> K8sResult<Deployment> {
    let deployment = build_deployment(namespace, request);

    client
        .namespaced::<Deployment>(Some(namespace))
        .create(&PostParams::default(), &deployment)
        .await
        .map_err(|e| K8sError::api("failed to create deployment", e))
}

/// Count deployments in every namespace
pub async fn count_deployments_per_namespace(
    client: &KubeClient,
) -> K8sResult<Vec<NamespaceDeploymentCount>> {
    let namespaces = client
        .cluster::<Namespace>()
        .list(&ListParams::default())
        .await
        .map_err(|e| K8sError::api("failed to list namespaces", e))?;

    let mut counts = Vec::with_capacity(namespaces.items.len());
    for ns in namespaces.items {
        let namespace = ns.metadata.name.unwrap_or_default();
        let deployments = client
            .namespaced::<Deployment>(Some(&namespace))
            .list(&ListParams::default())
            .await
            .map_err(|e| K8sError::api("failed to list deployments", e))?;

        counts.push(NamespaceDeploymentCount {
            namespace,
            deployment_num: deployments.items.len(),
        });
    }

    Ok(counts)
}

/// Expand the simplified payload into a full Deployment manifest: one
/// container with the requested port, cpu/memory set as both limit and
/// request, and optional HTTP readiness/liveness probes against
/// `health_path`.
fn build_deployment(namespace: &str, request: &DeploymentCreate) -> Deployment {
    let quantities = BTreeMap::from([
        ("cpu".to_string(), Quantity(request.cpu.clone())),
        ("memory".to_string(), Quantity(request.memory.clone())),
    ]);

    let probe = |secs: i32| Probe {
        http_get: Some(HTTPGetAction {
            path: Some(request.health_path.clone()),
            port: IntOrString::Int(request.container_port),
            ..Default::default()
        }),
        initial_delay_seconds: Some(secs),
        timeout_seconds: Some(secs),
        period_seconds: Some(secs),
        ..Default::default()
    };

    let container = Container {
        name: request.name.clone(),
        image: Some(request.image.clone()),
        ports: Some(vec![ContainerPort {
            name: Some("http".to_string()),
            protocol: Some("TCP".to_string()),
            container_port: request.container_port,
            ..Default::default()
        }]),
        resources: Some(ResourceRequirements {
            limits: Some(quantities.clone()),
            requests: Some(quantities),
            ..Default::default()
        }),
        readiness_probe: request.health_check.then(|| probe(5)),
        liveness_probe: request.health_check.then(|| probe(15)),
        ..Default::default()
    };

    Deployment {
        metadata: ObjectMeta {
            name: Some(request.name.clone()),
            namespace: Some(namespace.to_string()),
            labels: Some(request.labels.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(request.replicas),
            selector: LabelSelector {
                match_labels: Some(request.labels.clone()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    name: Some(request.name.clone()),
                    labels: Some(request.labels.clone()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![container],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        status: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(health_check: bool) -> DeploymentCreate {
        DeploymentCreate {
            name: "web".to_string(),
            replicas: 3,
            image: "nginx:1.27".to_string(),
            labels: BTreeMap::from([("app".to_string(), "web".to_string())]),
            cpu: "500m".to_string(),
            memory: "256Mi".to_string(),
            container_port: 8080,
            health_check,
            health_path: "/healthz".to_string(),
        }
    }

    #[test]
    fn build_sets_metadata_selector_and_replicas() {
        let deployment = build_deployment("staging", &request(false));

        assert_eq!(deployment.metadata.name.as_deref(), Some("web"));
        assert_eq!(deployment.metadata.namespace.as_deref(), Some("staging"));

        let spec = deployment.spec.expect("spec");
        assert_eq!(spec.replicas, Some(3));
        assert_eq!(
            spec.selector.match_labels.as_ref().and_then(|l| l.get("app")),
            Some(&"web".to_string())
        );
    }

    #[test]
    fn build_sets_resources_as_limits_and_requests() {
        let deployment = build_deployment("staging", &request(false));
        let container = deployment.spec.unwrap().template.spec.unwrap().containers[0].clone();
        let resources = container.resources.expect("resources");

        let limits = resources.limits.expect("limits");
        let requests = resources.requests.expect("requests");
        assert_eq!(limits.get("cpu"), Some(&Quantity("500m".to_string())));
        assert_eq!(requests.get("memory"), Some(&Quantity("256Mi".to_string())));
    }

    #[test]
    fn probes_follow_the_health_check_flag() {
        let without = build_deployment("staging", &request(false));
        let container = without.spec.unwrap().template.spec.unwrap().containers[0].clone();
        assert!(container.readiness_probe.is_none());
        assert!(container.liveness_probe.is_none());

        let with = build_deployment("staging", &request(true));
        let container = with.spec.unwrap().template.spec.unwrap().containers[0].clone();

        let readiness = container.readiness_probe.expect("readiness probe");
        assert_eq!(readiness.initial_delay_seconds, Some(5));
        assert_eq!(
            readiness.http_get.as_ref().and_then(|g| g.path.as_deref()),
            Some("/healthz")
        );

        let liveness = container.liveness_probe.expect("liveness probe");
        assert_eq!(liveness.initial_delay_seconds, Some(15));
        assert_eq!(liveness.period_seconds, Some(15));
    }
}
