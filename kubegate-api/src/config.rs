//! Configuration management for the kubegate API
//!
//! Settings are resolved in three layers:
//! 1. Environment variables (highest priority)
//! 2. Configuration file (TOML format)
//! 3. Default values (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Main configuration struct for kubegate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Cluster connection configuration
    pub kubernetes: KubernetesConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Pod log retrieval configuration
    pub pod_logs: PodLogConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

/// Cluster connection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesConfig {
    /// Path to a kubeconfig file; unset means kube's inferred config
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use
    pub context: Option<String>,
    /// Use the in-cluster service account instead of a kubeconfig
    pub in_cluster: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Directory for log files
    pub log_dir: PathBuf,
    /// Enable file logging
    pub file_logging_enabled: bool,
}

/// Pod log retrieval configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PodLogConfig {
    /// Number of trailing lines returned by the pod log endpoint
    pub tail_lines: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9090,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("/var/log/kubegate"),
            file_logging_enabled: false,
        }
    }
}

impl Default for PodLogConfig {
    fn default() -> Self {
        Self { tail_lines: 2000 }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {0}: {1}")]
    FileRead(PathBuf, String),

    #[error("failed to parse config file: {0}")]
    Parse(String),
}

impl GatewayConfig {
    /// Load configuration from defaults, an optional config file, and
    /// environment variable overrides
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(config_path) = Self::find_config_file() {
            match Self::load_from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => tracing::warn!("Ignoring config file: {}", e),
            }
        }

        config.apply_env_overrides();

        config
    }

    /// Load configuration from a specific file path
    pub fn load_from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.clone(), e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Find a configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let paths = [
            std::env::var("KUBEGATE_CONFIG").ok().map(PathBuf::from),
            Some(PathBuf::from("/etc/kubegate/config.toml")),
            Some(PathBuf::from("./kubegate.toml")),
        ];

        paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("KUBEGATE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("KUBEGATE_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(path) = std::env::var("KUBEGATE_KUBECONFIG") {
            self.kubernetes.kubeconfig = Some(PathBuf::from(path));
        }
        if let Ok(context) = std::env::var("KUBEGATE_CONTEXT") {
            self.kubernetes.context = Some(context);
        }
        if let Ok(in_cluster) = std::env::var("KUBEGATE_IN_CLUSTER") {
            self.kubernetes.in_cluster = in_cluster.parse().unwrap_or(false);
        }
        if let Ok(level) = std::env::var("KUBEGATE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(tail) = std::env::var("KUBEGATE_POD_LOG_TAIL_LINES") {
            if let Ok(tail) = tail.parse() {
                self.pod_logs.tail_lines = tail;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = GatewayConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert!(config.kubernetes.kubeconfig.is_none());
        assert!(!config.kubernetes.in_cluster);
        assert_eq!(config.pod_logs.tail_lines, 2000);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [server]
            port = 8443

            [kubernetes]
            kubeconfig = "/home/ops/.kube/config"
            context = "staging"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 8443);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.kubernetes.kubeconfig,
            Some(PathBuf::from("/home/ops/.kube/config"))
        );
        assert_eq!(config.kubernetes.context.as_deref(), Some("staging"));
        assert_eq!(config.pod_logs.tail_lines, 2000);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.file_logging_enabled);
    }
}
