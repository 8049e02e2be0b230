use std::path::Path;

use serde::Deserialize;

use crate::platform::{Metric, Platform};

pub const DEFAULT_CONFIG_FILE: &str = "hoststat.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SamplingConfig {
    /// Overrides detection of the running OS.
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Mount point or device passed to df / iostat; empty means all.
    #[serde(default)]
    pub path: String,
    /// Each external command is killed after this long.
    #[serde(default = "default_command_timeout_ms")]
    pub command_timeout_ms: u64,
    /// Deadline for the whole snapshot.
    #[serde(default = "default_snapshot_timeout_ms")]
    pub snapshot_timeout_ms: u64,
    #[serde(default = "default_metrics")]
    pub metrics: Vec<Metric>,
}

fn default_command_timeout_ms() -> u64 {
    5_000
}

fn default_snapshot_timeout_ms() -> u64 {
    30_000
}

fn default_metrics() -> Vec<Metric> {
    Metric::ALL.to_vec()
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            platform: None,
            path: String::new(),
            command_timeout_ms: default_command_timeout_ms(),
            snapshot_timeout_ms: default_snapshot_timeout_ms(),
            metrics: default_metrics(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub pretty: bool,
}

impl AppConfig {
    /// `$CONFIG_FILE` must exist when set; otherwise `hoststat.toml` is read
    /// if present, else defaults apply.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(&path),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_path(DEFAULT_CONFIG_FILE)
            }
            Err(_) => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.sampling.command_timeout_ms > 0,
            "sampling.command_timeout_ms must be > 0, got {}",
            self.sampling.command_timeout_ms
        );
        anyhow::ensure!(
            self.sampling.snapshot_timeout_ms > 0,
            "sampling.snapshot_timeout_ms must be > 0, got {}",
            self.sampling.snapshot_timeout_ms
        );
        anyhow::ensure!(
            !self.sampling.metrics.is_empty(),
            "sampling.metrics must list at least one metric"
        );
        anyhow::ensure!(
            !self.sampling.path.trim().contains(char::is_whitespace),
            "sampling.path must be a single mount point or device, got {:?}",
            self.sampling.path
        );
        Ok(())
    }
}
