//! Kubernetes error types
//!
//! Every control-plane failure is wrapped with a human-readable prefix and
//! surfaced as a single opaque error; the HTTP layer maps it to a status code.

use thiserror::Error;

/// Kubernetes-specific errors
#[derive(Debug, Error)]
pub enum K8sError {
    /// Error from the kube client, tagged with the operation that failed
    #[error("{context}: {source}")]
    Api {
        context: &'static str,
        #[source]
        source: kube::Error,
    },

    /// Request body could not be deserialized into the resource type
    #[error("invalid resource manifest: {0}")]
    InvalidManifest(#[from] serde_json::Error),

    /// Kubeconfig could not be read or turned into a client
    #[error("invalid kubeconfig: {0}")]
    InvalidKubeconfig(String),
}

impl K8sError {
    /// Wrap a kube client error with the operation it belongs to.
    pub fn api(context: &'static str, source: kube::Error) -> Self {
        Self::Api { context, source }
    }
}

/// Result type alias for Kubernetes operations
pub type K8sResult<T> = std::result::Result<T, K8sError>;
