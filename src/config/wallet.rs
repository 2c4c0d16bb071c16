//! Wallet and site-ownership configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::bounds::{duration_range, int_at_most, int_range, non_empty};

/// Upper bound on `backup_interval` (7 days).
pub const BACKUP_INTERVAL_LIMIT: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Upper bound on `max_sites_per_wallet`.
pub const MAX_SITES_PER_WALLET_LIMIT: u32 = 10_000;

/// Upper bound on `backup_retention`.
pub const BACKUP_RETENTION_LIMIT: u32 = 365;

/// Wallet configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Directory where wallets are created by default
    pub default_wallet_dir: String,

    /// How often wallets are backed up when auto-backup is on
    #[serde(with = "humantime_serde")]
    pub backup_interval: Duration,

    /// Maximum sites a single wallet may own
    pub max_sites_per_wallet: u32,

    /// Number of backups kept before the oldest is dropped
    pub backup_retention: u32,

    /// Back up wallets on the backup interval
    pub auto_backup: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            default_wallet_dir: "./wallets".to_string(),
            backup_interval: Duration::from_secs(24 * 60 * 60),
            max_sites_per_wallet: 1000,
            backup_retention: 7,
            auto_backup: true,
        }
    }
}

impl WalletConfig {
    /// Returns the first violated rule, if any.
    pub fn validate(&self) -> Result<(), String> {
        non_empty("default_wallet_dir", &self.default_wallet_dir)?;
        duration_range("backup_interval", self.backup_interval, BACKUP_INTERVAL_LIMIT, "7 days")?;
        int_range(
            "max_sites_per_wallet",
            self.max_sites_per_wallet,
            MAX_SITES_PER_WALLET_LIMIT,
            "10000",
        )?;
        int_at_most("backup_retention", self.backup_retention, BACKUP_RETENTION_LIMIT, "365")?;
        Ok(())
    }
}
