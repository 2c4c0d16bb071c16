//! Content and access security configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::bounds::{duration_range, int_range};

/// Upper bound on `max_content_size` (1 GiB).
pub const MAX_CONTENT_SIZE_LIMIT: u64 = 1024 * 1024 * 1024;

/// Upper bound on `max_file_count`.
pub const MAX_FILE_COUNT_LIMIT: u32 = 10_000;

/// Upper bound on `max_path_length`.
pub const MAX_PATH_LENGTH_LIMIT: u32 = 1024;

/// Upper bound on `rate_limit` (requests per minute).
pub const RATE_LIMIT_LIMIT: u32 = 10_000;

/// Upper bound on `ban_duration`.
pub const BAN_DURATION_LIMIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Upper bound on `max_login_attempts`.
pub const MAX_LOGIN_ATTEMPTS_LIMIT: u32 = 100;

/// Upper bound on `session_timeout` (30 days).
pub const SESSION_TIMEOUT_LIMIT: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Security configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Maximum size of a single piece of site content, in bytes
    pub max_content_size: u64,

    /// Maximum number of files per site
    pub max_file_count: u32,

    /// Maximum length of a path within a site
    pub max_path_length: u32,

    /// Requests allowed per peer per minute
    pub rate_limit: u32,

    /// How long a misbehaving peer stays banned
    #[serde(with = "humantime_serde")]
    pub ban_duration: Duration,

    /// Failed login attempts before lockout
    pub max_login_attempts: u32,

    /// Idle time before an authenticated session expires
    #[serde(with = "humantime_serde")]
    pub session_timeout: Duration,

    /// Verify peer signatures before accepting content
    pub enable_peer_validation: bool,

    /// Enforce the per-peer rate limit
    pub enable_rate_limiting: bool,

    /// Reject weak wallet passphrases
    pub require_strong_passphrase: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_content_size: 10 * 1024 * 1024,
            max_file_count: 1000,
            max_path_length: 256,
            rate_limit: 100,
            ban_duration: Duration::from_secs(60 * 60),
            max_login_attempts: 5,
            session_timeout: Duration::from_secs(24 * 60 * 60),
            enable_peer_validation: true,
            enable_rate_limiting: true,
            require_strong_passphrase: true,
        }
    }
}

impl SecurityConfig {
    /// Returns the first violated rule, if any. Rules run in the order the
    /// fields are declared.
    pub fn validate(&self) -> Result<(), String> {
        int_range("max_content_size", self.max_content_size, MAX_CONTENT_SIZE_LIMIT, "1 GiB")?;
        int_range("max_file_count", self.max_file_count, MAX_FILE_COUNT_LIMIT, "10000")?;
        int_range("max_path_length", self.max_path_length, MAX_PATH_LENGTH_LIMIT, "1024")?;
        int_range("rate_limit", self.rate_limit, RATE_LIMIT_LIMIT, "10000")?;
        duration_range("ban_duration", self.ban_duration, BAN_DURATION_LIMIT, "24h")?;
        int_range("max_login_attempts", self.max_login_attempts, MAX_LOGIN_ATTEMPTS_LIMIT, "100")?;
        duration_range("session_timeout", self.session_timeout, SESSION_TIMEOUT_LIMIT, "30 days")?;
        Ok(())
    }
}
