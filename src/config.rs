//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::artifacts::ArtifactPaths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub artifacts: ArtifactsConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Startup artifact locations
#[derive(Debug, Clone, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory holding the four artifact files under their
    /// conventional names
    #[serde(default = "default_artifacts_dir")]
    pub dir: String,

    /// Per-file overrides of the conventional names
    #[serde(default)]
    pub features_file: Option<String>,
    #[serde(default)]
    pub features_scaled_file: Option<String>,
    #[serde(default)]
    pub model_file: Option<String>,
    #[serde(default)]
    pub scaler_file: Option<String>,
}

fn default_artifacts_dir() -> String {
    "./data".to_string()
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: default_artifacts_dir(),
            features_file: None,
            features_scaled_file: None,
            model_file: None,
            scaler_file: None,
        }
    }
}

impl ArtifactsConfig {
    /// Resolve the four artifact file paths
    pub fn paths(&self) -> ArtifactPaths {
        let dir = PathBuf::from(&self.dir);
        let mut paths = ArtifactPaths::from_dir(&dir);

        if let Some(file) = &self.features_file {
            paths.features = dir.join(file);
        }
        if let Some(file) = &self.features_scaled_file {
            paths.features_scaled = dir.join(file);
        }
        if let Some(file) = &self.model_file {
            paths.model = dir.join(file);
        }
        if let Some(file) = &self.scaler_file {
            paths.scaler = dir.join(file);
        }

        paths
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("driveguard").join("config.toml")),
            Some(PathBuf::from("/etc/driveguard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var("DRIVEGUARD_ARTIFACTS_DIR") {
            self.artifacts.dir = dir;
        }

        if let Ok(host) = std::env::var("DRIVEGUARD_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("DRIVEGUARD_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        if let Ok(level) = std::env::var("DRIVEGUARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("DRIVEGUARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# DriveGuard Configuration
#
# Environment variables override these settings:
# - DRIVEGUARD_ARTIFACTS_DIR
# - DRIVEGUARD_API_HOST
# - DRIVEGUARD_API_PORT
# - DRIVEGUARD_LOG_LEVEL
# - DRIVEGUARD_LOG_FORMAT

[artifacts]
# Directory holding features.csv, features_scaled.csv, model.json, scaler.json
dir = "./data"

# Per-file overrides of the conventional names
# features_file = "X_test.csv"
# features_scaled_file = "X_test_scaled.csv"
# model_file = "model.json"
# scaler_file = "scaler.json"

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8090

# Allowed CORS origins (empty = permissive)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
