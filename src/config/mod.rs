//! Configuration aggregate for a Peervault node
//!
//! The aggregate is built from layered sources:
//! - built-in defaults (`Config::default()`),
//! - a persisted TOML file (`Config::from_file`), or
//! - process environment variables (`Config::from_env`).
//!
//! The file and environment loaders are independent entry points; neither
//! composes with the other. A loaded file is validated before the aggregate
//! is handed out, so callers never observe a partially valid `Config`.
//!
//! # Example Configuration
//!
//! ```toml
//! environment = "development"
//! log_level = "info"
//!
//! [network]
//! listen_addr = "/ip4/0.0.0.0/tcp/4001"
//! bootstrap_peers = ["/ip4/10.0.0.5/tcp/4001"]
//! max_peers = 100
//! peer_timeout = "30s"
//! enable_mdns = true
//!
//! [security]
//! max_content_size = 10485760
//! rate_limit = 100
//! ban_duration = "1h"
//! session_timeout = "24h"
//!
//! [storage]
//! data_dir = "./data"
//! max_file_size = 104857600
//! cleanup_interval = "1h"
//!
//! [wallet]
//! default_wallet_dir = "./wallets"
//! backup_interval = "24h"
//!
//! [node]
//! metrics_port = 9090
//! max_memory_usage = 104857600
//! ```

mod bounds;

pub mod network;
pub mod node;
pub mod security;
pub mod storage;
pub mod wallet;

pub use network::NetworkConfig;
pub use node::NodeConfig;
pub use security::SecurityConfig;
pub use storage::StorageConfig;
pub use wallet::WalletConfig;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Recognized deployment environments.
pub const ENVIRONMENTS: [&str; 3] = ["development", "staging", "production"];

/// Recognized log levels.
pub const LOG_LEVELS: [&str; 4] = ["debug", "info", "warn", "error"];

/// Environment variables read by `Config::from_env`.
pub const ENV_ENVIRONMENT: &str = "PEERVAULT_ENV";
pub const ENV_LOG_LEVEL: &str = "PEERVAULT_LOG_LEVEL";
pub const ENV_LISTEN_ADDR: &str = "PEERVAULT_LISTEN_ADDR";
pub const ENV_BOOTSTRAP_PEERS: &str = "PEERVAULT_BOOTSTRAP_PEERS";
pub const ENV_MAX_PEERS: &str = "PEERVAULT_MAX_PEERS";
pub const ENV_MAX_CONTENT_SIZE: &str = "PEERVAULT_MAX_CONTENT_SIZE";
pub const ENV_DATA_DIR: &str = "PEERVAULT_DATA_DIR";

/// Complete configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Deployment environment (development, staging, production)
    pub environment: String,

    /// Log level (debug, info, warn, error)
    pub log_level: String,

    /// Network configuration
    pub network: NetworkConfig,

    /// Security configuration
    pub security: SecurityConfig,

    /// Storage configuration
    pub storage: StorageConfig,

    /// Wallet configuration
    pub wallet: WalletConfig,

    /// Node configuration
    pub node: NodeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            log_level: "info".to_string(),
            network: NetworkConfig::default(),
            security: SecurityConfig::default(),
            storage: StorageConfig::default(),
            wallet: WalletConfig::default(),
            node: NodeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// Keys present in the file override defaults; absent keys keep their
    /// defaults and unknown keys are ignored. The merged result is
    /// validated before it is returned, so a validation failure yields no
    /// aggregate at all.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;

        debug!(path = %path.display(), "loaded configuration from file");
        Ok(config)
    }

    /// Load configuration from the process environment.
    ///
    /// See [`Config::from_env_with`] for the override rules.
    pub fn from_env() -> Self {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Load configuration from an explicit name-to-value lookup.
    ///
    /// Starts from defaults and applies the fixed set of `PEERVAULT_*`
    /// variables. Empty values are skipped. Numeric values that fail to
    /// parse are silently ignored and the default is kept; environment
    /// overrides must never abort startup. The result is deliberately not
    /// validated here.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(environment) = get(ENV_ENVIRONMENT) {
            config.environment = environment;
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(addr) = get(ENV_LISTEN_ADDR) {
            config.network.listen_addr = addr;
        }
        if let Some(peers) = get(ENV_BOOTSTRAP_PEERS) {
            config.network.bootstrap_peers = peers
                .split(',')
                .map(|peer| peer.trim().to_string())
                .filter(|peer| !peer.is_empty())
                .collect();
        }
        if let Some(value) = get(ENV_MAX_PEERS) {
            if let Ok(max_peers) = value.parse() {
                config.network.max_peers = max_peers;
            }
        }
        if let Some(value) = get(ENV_MAX_CONTENT_SIZE) {
            if let Ok(size) = value.parse() {
                config.security.max_content_size = size;
            }
        }
        if let Some(dir) = get(ENV_DATA_DIR) {
            config.storage.data_dir = dir;
        }

        config
    }

    /// Validate the whole aggregate.
    ///
    /// Checks run in a fixed order: environment, log level, then the
    /// network, security, storage, wallet, and node sections. The first
    /// violated rule is returned, wrapped with the section it came from.
    pub fn validate(&self) -> ConfigResult<()> {
        if !ENVIRONMENTS.contains(&self.environment.as_str()) {
            return Err(ConfigError::Validation {
                section: "environment",
                message: format!(
                    "unknown environment \"{}\" (expected one of: {})",
                    self.environment,
                    ENVIRONMENTS.join(", ")
                ),
            });
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::Validation {
                section: "log_level",
                message: format!(
                    "unknown log level \"{}\" (expected one of: {})",
                    self.log_level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        self.network.validate().map_err(|message| ConfigError::Validation {
            section: "network",
            message,
        })?;
        self.security.validate().map_err(|message| ConfigError::Validation {
            section: "security",
            message,
        })?;
        self.storage.validate().map_err(|message| ConfigError::Validation {
            section: "storage",
            message,
        })?;
        self.wallet.validate().map_err(|message| ConfigError::Validation {
            section: "wallet",
            message,
        })?;
        self.node.validate().map_err(|message| ConfigError::Validation {
            section: "node",
            message,
        })?;

        Ok(())
    }

    /// Serialize the full aggregate to TOML and write it to `path`,
    /// overwriting any existing content.
    ///
    /// Does not validate first; callers are expected to hold a validated
    /// aggregate.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!(path = %path.display(), "wrote configuration to file");
        Ok(())
    }
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.config.environment = environment.into();
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.network.listen_addr = addr.into();
        self
    }

    pub fn max_peers(mut self, max_peers: u32) -> Self {
        self.config.network.max_peers = max_peers;
        self
    }

    pub fn data_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.storage.data_dir = dir.into();
        self
    }

    pub fn wallet_dir(mut self, dir: impl Into<String>) -> Self {
        self.config.wallet.default_wallet_dir = dir.into();
        self
    }

    /// Validate and return the built configuration.
    pub fn build(self) -> ConfigResult<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
