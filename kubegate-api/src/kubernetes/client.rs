//! Kubernetes client wrapper
//!
//! Wraps the kube-rs Client with the API server address and typed helpers
//! for building scoped `Api` handles.

use k8s_openapi::{ClusterResourceScope, NamespaceResourceScope};
use kube::api::Api;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config, Resource};
use std::path::Path;

use super::error::{K8sError, K8sResult};
use crate::config::KubernetesConfig;

/// Wrapper around the kube-rs Client with connection context
#[derive(Clone)]
pub struct KubeClient {
    inner: Client,
    api_server: String,
}

impl KubeClient {
    /// Connect according to the gateway configuration: in-cluster when asked,
    /// an explicit kubeconfig path when given, otherwise kube's inferred
    /// configuration (KUBECONFIG / ~/.kube/config / in-cluster).
    pub async fn connect(config: &KubernetesConfig) -> K8sResult<Self> {
        if config.in_cluster {
            Self::from_incluster().await
        } else if let Some(path) = &config.kubeconfig {
            Self::from_kubeconfig_file(path, config.context.as_deref()).await
        } else {
            Self::from_inferred().await
        }
    }

    /// Create a client from a kubeconfig file with an optional context
    pub async fn from_kubeconfig_file(path: &Path, context: Option<&str>) -> K8sResult<Self> {
        let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
            K8sError::InvalidKubeconfig(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config = Config::from_custom_kubeconfig(
            kubeconfig,
            &KubeConfigOptions {
                context: context.map(String::from),
                ..Default::default()
            },
        )
        .await
        .map_err(|e| K8sError::InvalidKubeconfig(format!("failed to build client config: {e}")))?;

        Self::from_config(config)
    }

    /// Create a client from in-cluster configuration (for running inside K8s)
    pub async fn from_incluster() -> K8sResult<Self> {
        let config = Config::incluster().map_err(|e| {
            K8sError::InvalidKubeconfig(format!("failed to load in-cluster config: {e}"))
        })?;

        Self::from_config(config)
    }

    /// Create a client from kube's inferred configuration
    pub async fn from_inferred() -> K8sResult<Self> {
        let config = Config::infer().await.map_err(|e| {
            K8sError::InvalidKubeconfig(format!("failed to infer cluster config: {e}"))
        })?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> K8sResult<Self> {
        let api_server = config.cluster_url.to_string();
        let client = Client::try_from(config)
            .map_err(|e| K8sError::api("failed to build cluster client", e))?;

        Ok(Self {
            inner: client,
            api_server,
        })
    }

    /// Get the inner kube-rs Client
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Get the API server URL
    pub fn api_server(&self) -> &str {
        &self.api_server
    }

    /// Typed handle for a namespaced resource kind. No namespace means the
    /// whole cluster.
    pub fn namespaced<K>(&self, namespace: Option<&str>) -> Api<K>
    where
        K: Resource<Scope = NamespaceResourceScope>,
        K::DynamicType: Default,
    {
        match namespace {
            Some(ns) => Api::namespaced(self.inner.clone(), ns),
            None => Api::all(self.inner.clone()),
        }
    }

    /// Typed handle for a cluster-scoped resource kind.
    pub fn cluster<K>(&self) -> Api<K>
    where
        K: Resource<Scope = ClusterResourceScope>,
        K::DynamicType: Default,
    {
        Api::all(self.inner.clone())
    }
}

impl std::fmt::Debug for KubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeClient")
            .field("api_server", &self.api_server)
            .finish()
    }
}
