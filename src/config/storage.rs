//! On-disk storage configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::bounds::{duration_at_most, duration_range, int_at_most, int_range, non_empty};

/// Upper bound on `max_file_size` (1 GiB).
pub const MAX_FILE_SIZE_LIMIT: u64 = 1024 * 1024 * 1024;

/// Upper bound on `cleanup_interval`.
pub const CLEANUP_INTERVAL_LIMIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Upper bound on `max_retries`.
pub const MAX_RETRIES_LIMIT: u32 = 100;

/// Upper bound on `retry_delay`.
pub const RETRY_DELAY_LIMIT: Duration = Duration::from_secs(10);

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Data directory for site content and indexes
    pub data_dir: String,

    /// Maximum size of a single stored file, in bytes
    pub max_file_size: u64,

    /// How often orphaned content is swept
    #[serde(with = "humantime_serde")]
    pub cleanup_interval: Duration,

    /// Retry attempts for failed disk operations
    pub max_retries: u32,

    /// Delay between retry attempts
    #[serde(with = "humantime_serde")]
    pub retry_delay: Duration,

    /// Compress stored content
    pub enable_compression: bool,

    /// Encrypt stored content at rest
    pub enable_encryption: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            max_file_size: 100 * 1024 * 1024,
            cleanup_interval: Duration::from_secs(60 * 60),
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
            enable_compression: true,
            enable_encryption: false,
        }
    }
}

impl StorageConfig {
    /// Returns the first violated rule, if any.
    pub fn validate(&self) -> Result<(), String> {
        non_empty("data_dir", &self.data_dir)?;
        int_range("max_file_size", self.max_file_size, MAX_FILE_SIZE_LIMIT, "1 GiB")?;
        duration_range("cleanup_interval", self.cleanup_interval, CLEANUP_INTERVAL_LIMIT, "24h")?;
        int_at_most("max_retries", self.max_retries, MAX_RETRIES_LIMIT, "100")?;
        duration_at_most("retry_delay", self.retry_delay, RETRY_DELAY_LIMIT, "10s")?;
        Ok(())
    }
}
