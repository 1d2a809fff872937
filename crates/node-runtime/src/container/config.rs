//! # Node Configuration
//!
//! Defaults come from `GatewayConfig::default()`. A JSON file named by
//! `MR_CONFIG` replaces them, then individual `MR_*` variables override
//! single fields. Unparseable variables are logged and ignored, like a
//! missing variable.

use mr_02_api_gateway::domain::ConfigError;
use mr_02_api_gateway::GatewayConfig;
use shared_types::DEFAULT_SIGNING_KEY;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

pub const ENV_CONFIG_FILE: &str = "MR_CONFIG";
pub const ENV_HOST: &str = "MR_HOST";
pub const ENV_PORT: &str = "MR_PORT";
pub const ENV_SIGNING_KEY: &str = "MR_SIGNING_KEY";
pub const ENV_REQUIRE_SIGNATURE: &str = "MR_REQUIRE_SIGNATURE";
pub const ENV_SEED_DEMO: &str = "MR_SEED_DEMO";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Load configuration from the process environment.
pub fn load_config() -> Result<GatewayConfig, ConfigLoadError> {
    load_config_with(|key| std::env::var(key).ok())
}

/// Load configuration using `env` to look up variables.
pub fn load_config_with<F>(env: F) -> Result<GatewayConfig, ConfigLoadError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match env(ENV_CONFIG_FILE) {
        Some(path) => {
            let path = PathBuf::from(path);
            let raw = std::fs::read_to_string(&path).map_err(|source| ConfigLoadError::Read {
                path: path.clone(),
                source,
            })?;
            let config = serde_json::from_str(&raw)
                .map_err(|source| ConfigLoadError::Parse { path: path.clone(), source })?;
            info!(path = %path.display(), "Loaded configuration file");
            config
        }
        None => GatewayConfig::default(),
    };

    if let Some(host) = env(ENV_HOST) {
        match host.parse() {
            Ok(ip) => config.http.host = ip,
            Err(_) => warn!("{} is not an IP address: {}", ENV_HOST, host),
        }
    }

    if let Some(port) = env(ENV_PORT) {
        match port.parse() {
            Ok(p) => config.http.port = p,
            Err(_) => warn!("{} is not a port number: {}", ENV_PORT, port),
        }
    }

    if let Some(key) = env(ENV_SIGNING_KEY) {
        config.security.signing_key = key;
        info!("Loaded signing key from environment");
    }

    if let Some(raw) = env(ENV_REQUIRE_SIGNATURE) {
        match parse_flag(&raw) {
            Some(flag) => config.security.require_signature = flag,
            None => warn!("{} is not a boolean: {}", ENV_REQUIRE_SIGNATURE, raw),
        }
    }

    if let Some(raw) = env(ENV_SEED_DEMO) {
        match parse_flag(&raw) {
            Some(flag) => config.ledger.seed_demo_tickets = flag,
            None => warn!("{} is not a boolean: {}", ENV_SEED_DEMO, raw),
        }
    }

    config.validate()?;

    if config.security.require_signature && config.security.signing_key == DEFAULT_SIGNING_KEY {
        warn!("Signatures are required but the default signing key is in use; set {}", ENV_SIGNING_KEY);
    }

    Ok(config)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
