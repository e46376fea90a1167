//! kubegate API library
//!
//! A management gateway exposing Kubernetes resource CRUD and listing over
//! HTTP. Every list endpoint goes through one generic selection pipeline
//! (filter by name substring, sort newest-first, paginate); everything else
//! is a pass-through to the cluster control plane.

pub mod api;
pub mod config;
pub mod error;
pub mod kubernetes;
pub mod logging;
pub mod state;
