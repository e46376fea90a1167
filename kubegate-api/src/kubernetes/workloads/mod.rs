//! Workload resource operations

pub mod daemonsets;
pub mod deployments;
pub mod pods;
pub mod statefulsets;
