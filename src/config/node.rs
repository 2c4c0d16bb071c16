//! Node runtime configuration (metrics, profiling, memory)

use serde::{Deserialize, Serialize};

use super::bounds::int_range;

/// Upper bound on `max_memory_usage` (1 TiB).
pub const MAX_MEMORY_USAGE_LIMIT: u64 = 1024 * 1024 * 1024 * 1024;

/// Node configuration
///
/// Port fields are `u16`, so the 0-65535 range is enforced by the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Serve Prometheus metrics
    pub enable_metrics: bool,

    /// Port for the metrics endpoint
    pub metrics_port: u16,

    /// Serve the profiling endpoint
    pub enable_profiling: bool,

    /// Port for the profiling endpoint
    pub profiling_port: u16,

    /// Soft cap on process memory, in bytes
    pub max_memory_usage: u64,

    /// Run periodic in-process garbage collection
    pub enable_gc: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            enable_metrics: true,
            metrics_port: 9090,
            enable_profiling: false,
            profiling_port: 6060,
            max_memory_usage: 100 * 1024 * 1024,
            enable_gc: true,
        }
    }
}

impl NodeConfig {
    /// Returns the first violated rule, if any.
    pub fn validate(&self) -> Result<(), String> {
        int_range("max_memory_usage", self.max_memory_usage, MAX_MEMORY_USAGE_LIMIT, "1 TiB")?;
        Ok(())
    }
}
