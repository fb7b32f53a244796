//! Configuration section schemas.
//!
//! Every section rejects unknown fields and converts into the runtime type
//! of the crate it configures.

use serde::{Deserialize, Serialize};
use wren_extract::{QueryOptions, DEFAULT_MAX_KEYS};
use wren_router::RouterSettings;
use wren_telemetry::{LogConfig, LogFormat};

/// Router registration settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RouterSection {
    /// Return an error for malformed `use` calls instead of logging them.
    #[serde(default = "default_true")]
    pub strict_use: bool,
}

impl Default for RouterSection {
    fn default() -> Self {
        Self { strict_use: true }
    }
}

impl From<&RouterSection> for RouterSettings {
    fn from(section: &RouterSection) -> Self {
        Self {
            strict_use: section.strict_use,
        }
    }
}

/// Query string parsing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QuerySection {
    /// Maximum number of `&`-separated pairs read per query; `0` is unlimited.
    #[serde(default = "default_max_keys")]
    pub max_keys: usize,
}

impl Default for QuerySection {
    fn default() -> Self {
        Self {
            max_keys: default_max_keys(),
        }
    }
}

impl From<&QuerySection> for QueryOptions {
    fn from(section: &QuerySection) -> Self {
        Self {
            max_keys: section.max_keys,
        }
    }
}

fn default_max_keys() -> usize {
    DEFAULT_MAX_KEYS
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// Enable logging.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Filter directives (trace, debug, info, warn, error, or per-target).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include source file and line in logs.
    #[serde(default)]
    pub include_location: bool,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_log_level(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

impl From<&LoggingSection> for LogConfig {
    fn from(section: &LoggingSection) -> Self {
        Self {
            enabled: section.enabled,
            level: section.level.clone(),
            format: section.format,
            file_line_info: section.include_location,
            ..LogConfig::production()
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}
