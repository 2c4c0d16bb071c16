//! Process-wide configuration handle
//!
//! Holds the validated aggregate behind a read-only handle. Readers take a
//! cheap `Arc` snapshot; mutation only happens through [`reload`], which
//! swaps the whole aggregate at once so readers never observe a torn
//! update.

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::error::{ConfigError, ConfigResult};

static CONFIG: OnceCell<RwLock<Arc<Config>>> = OnceCell::new();

/// Install the global configuration.
///
/// Call once at startup with a validated aggregate. Subsequent calls
/// return an error.
pub fn init(config: Config) -> ConfigResult<()> {
    CONFIG
        .set(RwLock::new(Arc::new(config)))
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Get a snapshot of the current configuration.
///
/// # Errors
/// Returns an error if the configuration has not been installed via
/// [`init`].
pub fn get() -> ConfigResult<Arc<Config>> {
    CONFIG
        .get()
        .map(|slot| slot.read().clone())
        .ok_or(ConfigError::NotInitialized)
}

/// Get a snapshot of the current configuration if initialized.
pub fn try_get() -> Option<Arc<Config>> {
    CONFIG.get().map(|slot| slot.read().clone())
}

/// Check whether the global configuration has been installed.
pub fn is_initialized() -> bool {
    CONFIG.get().is_some()
}

/// Reload the global configuration from a TOML file.
///
/// The file is loaded and validated first; on any failure the previous
/// aggregate stays in place. On success the whole aggregate is swapped
/// atomically.
pub fn reload<P: AsRef<Path>>(path: P) -> ConfigResult<()> {
    let slot = CONFIG.get().ok_or(ConfigError::NotInitialized)?;
    let config = Config::from_file(path)?;

    *slot.write() = Arc::new(config);
    info!("configuration reloaded");
    Ok(())
}
