//! Kubernetes integration for kubegate
//!
//! Provides the cluster client, the generic selection pipeline shared by all
//! list endpoints, and per-kind resource operations:
//! - Workloads (Pods, Deployments, StatefulSets, DaemonSets)
//! - Networking (Services, Ingresses)
//! - Configuration and storage (ConfigMaps, Secrets, PVCs, PVs)
//! - Cluster-scoped resources (Namespaces, Nodes)

pub mod client;
pub mod error;
pub mod selector;

// Sub-modules for different resource types
pub mod cluster_resources;
pub mod config_storage;
pub mod networking;
pub mod workloads;
