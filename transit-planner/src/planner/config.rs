//! Planner configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the dataset snapshot file.
pub const SNAPSHOT_ENV: &str = "TRANSIT_SNAPSHOT";

/// Environment variable giving the refresh interval in seconds.
pub const REFRESH_ENV: &str = "TRANSIT_REFRESH_SECS";

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for loading and refreshing the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Path to the dataset snapshot (JSON).
    pub snapshot_path: PathBuf,

    /// How often to rebuild the graph from the snapshot (seconds).
    /// Zero disables refreshing.
    pub refresh_interval_secs: u64,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(snapshot_path: impl Into<PathBuf>, refresh_interval_secs: u64) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            refresh_interval_secs,
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup, falling back to the
    /// defaults for anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(SNAPSHOT_ENV).filter(|p| !p.is_empty()) {
            config.snapshot_path = PathBuf::from(path);
        }

        if let Some(value) = lookup(REFRESH_ENV) {
            config.refresh_interval_secs =
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: REFRESH_ENV,
                        value: value.clone(),
                        reason: e.to_string(),
                    })?;
        }

        Ok(config)
    }

    /// Returns the refresh interval, or `None` when refreshing is disabled.
    pub fn refresh_interval(&self) -> Option<Duration> {
        (self.refresh_interval_secs > 0).then(|| Duration::from_secs(self.refresh_interval_secs))
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("cache/dataset.json"),
            refresh_interval_secs: 24 * 60 * 60, // daily
        }
    }
}
