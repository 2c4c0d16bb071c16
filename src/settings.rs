//! Flat, key-based access to configuration values.
//!
//! Generic consumers (plugin hosts, admin surfaces, templating) address
//! settings by a flat string key instead of the nested section structure.
//! The key table is built once at first use; every key is bound to exactly
//! one typed getter. Unknown keys, and keys bound to a different type than
//! the accessor called, resolve to the caller-supplied fallback with no
//! error signal.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::Config;

enum Binding {
    Str(fn(&Config) -> String),
    Int(fn(&Config) -> i64),
    Bool(fn(&Config) -> bool),
    Duration(fn(&Config) -> Duration),
}

static BINDINGS: Lazy<HashMap<&'static str, Binding>> = Lazy::new(|| {
    [
        // Strings
        ("environment", Binding::Str(|c| c.environment.clone())),
        ("log_level", Binding::Str(|c| c.log_level.clone())),
        ("listen_addr", Binding::Str(|c| c.network.listen_addr.clone())),
        ("data_dir", Binding::Str(|c| c.storage.data_dir.clone())),
        ("default_wallet_dir", Binding::Str(|c| c.wallet.default_wallet_dir.clone())),
        // Integers
        ("max_peers", Binding::Int(|c| c.network.max_peers as i64)),
        ("max_content_size", Binding::Int(|c| c.security.max_content_size as i64)),
        ("max_file_count", Binding::Int(|c| c.security.max_file_count as i64)),
        ("max_path_length", Binding::Int(|c| c.security.max_path_length as i64)),
        ("rate_limit", Binding::Int(|c| c.security.rate_limit as i64)),
        ("max_login_attempts", Binding::Int(|c| c.security.max_login_attempts as i64)),
        ("max_file_size", Binding::Int(|c| c.storage.max_file_size as i64)),
        ("max_retries", Binding::Int(|c| c.storage.max_retries as i64)),
        ("max_sites_per_wallet", Binding::Int(|c| c.wallet.max_sites_per_wallet as i64)),
        ("backup_retention", Binding::Int(|c| c.wallet.backup_retention as i64)),
        ("metrics_port", Binding::Int(|c| c.node.metrics_port as i64)),
        ("profiling_port", Binding::Int(|c| c.node.profiling_port as i64)),
        ("max_memory_usage", Binding::Int(|c| c.node.max_memory_usage as i64)),
        // Booleans
        ("enable_mdns", Binding::Bool(|c| c.network.enable_mdns)),
        ("enable_nat_traversal", Binding::Bool(|c| c.network.enable_nat_traversal)),
        ("enable_relay", Binding::Bool(|c| c.network.enable_relay)),
        ("enable_peer_validation", Binding::Bool(|c| c.security.enable_peer_validation)),
        ("enable_rate_limiting", Binding::Bool(|c| c.security.enable_rate_limiting)),
        ("require_strong_passphrase", Binding::Bool(|c| c.security.require_strong_passphrase)),
        ("enable_compression", Binding::Bool(|c| c.storage.enable_compression)),
        ("enable_encryption", Binding::Bool(|c| c.storage.enable_encryption)),
        ("auto_backup", Binding::Bool(|c| c.wallet.auto_backup)),
        ("enable_metrics", Binding::Bool(|c| c.node.enable_metrics)),
        ("enable_profiling", Binding::Bool(|c| c.node.enable_profiling)),
        ("enable_gc", Binding::Bool(|c| c.node.enable_gc)),
        // Durations
        ("peer_timeout", Binding::Duration(|c| c.network.peer_timeout)),
        ("ban_duration", Binding::Duration(|c| c.security.ban_duration)),
        ("session_timeout", Binding::Duration(|c| c.security.session_timeout)),
        ("cleanup_interval", Binding::Duration(|c| c.storage.cleanup_interval)),
        ("retry_delay", Binding::Duration(|c| c.storage.retry_delay)),
        ("backup_interval", Binding::Duration(|c| c.wallet.backup_interval)),
    ]
    .into_iter()
    .collect()
});

/// All keys recognized by the flat accessors.
pub fn keys() -> impl Iterator<Item = &'static str> {
    BINDINGS.keys().copied()
}

impl Config {
    /// Look up a string-typed setting, or `fallback` for unknown or
    /// non-string keys.
    pub fn get_str(&self, key: &str, fallback: &str) -> String {
        match BINDINGS.get(key) {
            Some(Binding::Str(get)) => get(self),
            _ => fallback.to_string(),
        }
    }

    /// Look up an integer-typed setting, or `fallback` for unknown or
    /// non-integer keys.
    pub fn get_int(&self, key: &str, fallback: i64) -> i64 {
        match BINDINGS.get(key) {
            Some(Binding::Int(get)) => get(self),
            _ => fallback,
        }
    }

    /// Look up a boolean-typed setting, or `fallback` for unknown or
    /// non-boolean keys.
    pub fn get_bool(&self, key: &str, fallback: bool) -> bool {
        match BINDINGS.get(key) {
            Some(Binding::Bool(get)) => get(self),
            _ => fallback,
        }
    }

    /// Look up a duration-typed setting, or `fallback` for unknown or
    /// non-duration keys.
    pub fn get_duration(&self, key: &str, fallback: Duration) -> Duration {
        match BINDINGS.get(key) {
            Some(Binding::Duration(get)) => get(self),
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_namespace_is_closed() {
        // 5 strings, 13 ints, 12 bools, 6 durations
        assert_eq!(keys().count(), 36);
        assert!(keys().all(|key| !key.is_empty()));
    }

    #[test]
    fn test_typed_lookup() {
        let config = Config::default();

        assert_eq!(config.get_str("listen_addr", ""), "/ip4/0.0.0.0/tcp/4001");
        assert_eq!(config.get_int("max_peers", 0), 100);
        assert!(config.get_bool("enable_mdns", false));
        assert_eq!(
            config.get_duration("peer_timeout", Duration::ZERO),
            Duration::from_secs(30)
        );
    }

    #[test]
    fn test_mistyped_key_returns_fallback() {
        let config = Config::default();

        // listen_addr is a string key; the int accessor must not see it
        assert_eq!(config.get_int("listen_addr", 7), 7);
        assert_eq!(config.get_str("max_peers", "none"), "none");
        assert!(!config.get_bool("peer_timeout", false));
    }
}
