//! Application state
//!
//! Shared state for the kubegate API server, built once at startup and
//! injected into handlers. No global singletons: tests construct their own
//! state with whatever client and configuration they need.

use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::kubernetes::client::KubeClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub kube: KubeClient,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    pub fn new(kube: KubeClient, config: GatewayConfig) -> Self {
        Self {
            kube,
            config: Arc::new(config),
        }
    }
}
