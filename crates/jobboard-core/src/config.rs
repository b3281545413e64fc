use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Retry policy parameters (optional section in config.toml).
///
/// Only idempotent requests that failed at the network level are retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per request (including the first).
    pub max_attempts: u32,
    /// Base delay in seconds for exponential backoff (e.g. 0.25 = 250ms).
    pub base_delay_secs: f64,
    /// Maximum backoff delay in seconds.
    pub max_delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            base_delay_secs: 0.25,
            max_delay_secs: 5,
        }
    }
}

impl RetryConfig {
    /// Fails on a base delay that is negative, NaN, infinite or too large for a `Duration`.
    pub fn to_policy(&self) -> Result<RetryPolicy> {
        let base_delay = Duration::try_from_secs_f64(self.base_delay_secs).with_context(|| {
            format!("retry.base_delay_secs = {} is not a valid delay", self.base_delay_secs)
        })?;
        Ok(RetryPolicy {
            max_attempts: self.max_attempts.max(1),
            base_delay,
            max_delay: Duration::from_secs(self.max_delay_secs),
        })
    }
}

/// Global configuration loaded from `~/.config/jobboard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobBoardConfig {
    /// Base URL of the job service; every route is resolved relative to it.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// TCP/TLS connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Optional retry policy; if missing, requests are never retried.
    #[serde(default)]
    pub retry: Option<RetryConfig>,
}

impl Default for JobBoardConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090/api/v1/".to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
            retry: None,
        }
    }
}

impl JobBoardConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn retry_policy(&self) -> Result<RetryPolicy> {
        match &self.retry {
            Some(r) => r.to_policy(),
            None => Ok(RetryPolicy::none()),
        }
    }

    /// Reject values that parse but cannot be used.
    ///
    /// A zero timeout means "never" to curl and "already expired" to tokio, so it is refused.
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1");
        }
        if self.connect_timeout_secs == 0 {
            bail!("connect_timeout_secs must be at least 1");
        }
        self.retry_policy()?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("jobboard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<JobBoardConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] but at an explicit path (tests, `--config`).
pub fn load_or_init_at(path: &Path) -> Result<JobBoardConfig> {
    if !path.exists() {
        let default_cfg = JobBoardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: JobBoardConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
