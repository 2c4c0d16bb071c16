//! Configuration core for Peervault nodes
//!
//! Builds an in-memory settings aggregate from layered sources (built-in
//! defaults, a TOML file, or process environment variables), enforces
//! semantic bounds on every field, and exposes both structural access and
//! a flat key-based accessor for consumers that do not know the schema at
//! compile time.
//!
//! The aggregate is load-once: construct it with one loader, validate it,
//! then treat it as read-only. For shared access across the process, hand
//! it to [`global::init`] and read snapshots with [`global::get`];
//! [`global::reload`] swaps the whole aggregate atomically.

pub mod config;
pub mod error;
pub mod global;
pub mod settings;

pub use config::{
    Config, ConfigBuilder, NetworkConfig, NodeConfig, SecurityConfig, StorageConfig, WalletConfig,
};
pub use error::{ConfigError, ConfigResult};
