//! Configuration and storage resource operations

pub mod configmaps;
pub mod pvcs;
pub mod pvs;
pub mod secrets;
