//! Runtime configuration
//!
//! Read from environment variables, falling back to defaults:
//!
//! - `CATNUB_UTC_OFFSET_MINUTES` - local day boundary, minutes east of UTC (default 420, UTC+7)
//! - `CATNUB_LOG` - tracing filter directive (default `catnub=info`)

use chrono::{FixedOffset, NaiveDate, Offset, Utc};
use thiserror::Error;

use crate::tracking::{offset_from_minutes, TrackingError};

pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 7 * 60;
pub const DEFAULT_LOG_FILTER: &str = "catnub=info";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Offset(#[from] TrackingError),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub offset: FixedOffset,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            offset: offset_from_minutes(DEFAULT_UTC_OFFSET_MINUTES).unwrap_or_else(|_| Utc.fix()),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let minutes = match lookup("CATNUB_UTC_OFFSET_MINUTES") {
            Some(raw) => {
                let parsed = raw.trim().parse::<i32>();
                parsed.map_err(|_| ConfigError::InvalidValue {
                    key: "CATNUB_UTC_OFFSET_MINUTES",
                    value: raw,
                })?
            }
            None => DEFAULT_UTC_OFFSET_MINUTES,
        };

        let log_filter = lookup("CATNUB_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            offset: offset_from_minutes(minutes)?,
            log_filter,
        })
    }

    pub fn utc_offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// Current calendar date at the configured offset
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}
