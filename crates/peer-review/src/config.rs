//! Application settings, read from the environment at startup.

use crate::submitter::DEFAULT_SUBMIT_DELAY;
use review_runtime::ProgramOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const SUBMIT_DELAY_VAR: &str = "PEER_REVIEW_SUBMIT_DELAY_MS";
pub const LOG_DIR_VAR: &str = "PEER_REVIEW_LOG_DIR";
pub const FPS_VAR: &str = "PEER_REVIEW_FPS";

const DEFAULT_FPS: u32 = 60;

/// Terminal window title.
pub const TITLE: &str = "Đánh giá đồng đội";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}={value:?} is not valid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// How long the simulated submitter takes to acknowledge.
    pub submit_delay: Duration,
    /// Where the daily log files go.
    pub log_dir: PathBuf,
    pub fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            log_dir: std::env::temp_dir().join("peer-review").join("logs"),
            fps: DEFAULT_FPS,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by any `PEER_REVIEW_*` variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64>(&lookup, SUBMIT_DELAY_VAR)? {
            config.submit_delay = Duration::from_millis(ms);
        }
        if let Some(dir) = lookup(LOG_DIR_VAR) {
            if dir.trim().is_empty() {
                return Err(invalid(LOG_DIR_VAR, dir, "must not be empty"));
            }
            config.log_dir = PathBuf::from(dir);
        }
        if let Some(fps) = parse_var::<u32>(&lookup, FPS_VAR)? {
            if !(1..=120).contains(&fps) {
                return Err(invalid(FPS_VAR, fps.to_string(), "must be between 1 and 120"));
            }
            config.fps = fps;
        }

        Ok(config)
    }

    /// Runtime options for the form: runtime defaults plus our title and fps.
    pub fn program_options(&self) -> ProgramOptions {
        ProgramOptions {
            fps: self.fps,
            title: Some(TITLE.to_string()),
            ..ProgramOptions::default()
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let parsed = raw.trim().parse::<T>();
    parsed.map(Some).map_err(|err| invalid(var, raw, err))
}

fn invalid(var: &'static str, value: String, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        value,
        reason: reason.to_string(),
    }
}
