//! Main configuration types.
//!
//! This module provides the top-level [`WrenConfig`] struct and its builder.

use serde::{Deserialize, Serialize};
use wren_extract::QueryOptions;
use wren_router::RouterSettings;
use wren_telemetry::{LogConfig, LogFormat};

use crate::{ConfigError, LoggingSection, QuerySection, RouterSection};

/// Complete Wren configuration.
///
/// Use [`ConfigLoader`](crate::ConfigLoader) to load configuration from files
/// and environment variables.
///
/// # Example
///
/// ```
/// use wren_config::WrenConfig;
///
/// let config = WrenConfig::default();
/// assert!(config.router.strict_use);
/// assert_eq!(config.query.max_keys, 1000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct WrenConfig {
    /// Router registration settings.
    #[serde(default)]
    pub router: RouterSection,

    /// Query string parsing settings.
    #[serde(default)]
    pub query: QuerySection,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSection,
}

impl WrenConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```
    /// use wren_config::{QuerySection, WrenConfig};
    ///
    /// let config = WrenConfig::builder()
    ///     .query(QuerySection { max_keys: 50 })
    ///     .build();
    ///
    /// assert_eq!(config.query.max_keys, 50);
    /// ```
    #[must_use]
    pub fn builder() -> WrenConfigBuilder {
        WrenConfigBuilder::new()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the log level does not parse as
    /// filter directives.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.enabled {
            self.log_config()
                .validate()
                .map_err(|e| ConfigError::invalid_value("logging.level", e.to_string()))?;
        }
        Ok(())
    }

    /// Development preset: pretty `debug` logs with source locations.
    ///
    /// # Example
    ///
    /// ```
    /// use wren_config::WrenConfig;
    ///
    /// let config = WrenConfig::development();
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    #[must_use]
    pub fn development() -> Self {
        let mut config = Self::default();

        config.logging.level = "debug".to_string();
        config.logging.format = LogFormat::Pretty;
        config.logging.include_location = true;

        config
    }

    /// Production preset: JSON `info` logs, malformed `use` calls logged and
    /// skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use wren_config::WrenConfig;
    ///
    /// let config = WrenConfig::production();
    /// assert_eq!(config.logging.format, wren_telemetry::LogFormat::Json);
    /// assert!(!config.router.strict_use);
    /// ```
    #[must_use]
    pub fn production() -> Self {
        let mut config = Self::default();

        config.logging.level = "info".to_string();
        config.logging.format = LogFormat::Json;
        config.router.strict_use = false;

        config
    }

    /// Router settings for a [`RouterTree`](wren_router::RouterTree).
    #[must_use]
    pub fn router_settings(&self) -> RouterSettings {
        RouterSettings::from(&self.router)
    }

    /// Options for [`get_query_params_with`](wren_extract::get_query_params_with).
    #[must_use]
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions::from(&self.query)
    }

    /// Logging setup for [`init_logging`](wren_telemetry::init_logging).
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::from(&self.logging)
    }
}

/// Builder for [`WrenConfig`].
#[derive(Debug, Default)]
pub struct WrenConfigBuilder {
    router: Option<RouterSection>,
    query: Option<QuerySection>,
    logging: Option<LoggingSection>,
}

impl WrenConfigBuilder {
    /// Create a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the router section.
    #[must_use]
    pub fn router(mut self, router: RouterSection) -> Self {
        self.router = Some(router);
        self
    }

    /// Set the query section.
    #[must_use]
    pub fn query(mut self, query: QuerySection) -> Self {
        self.query = Some(query);
        self
    }

    /// Set the logging section.
    #[must_use]
    pub fn logging(mut self, logging: LoggingSection) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Build the configuration.
    ///
    /// Any unset sections will use their default values.
    #[must_use]
    pub fn build(self) -> WrenConfig {
        WrenConfig {
            router: self.router.unwrap_or_default(),
            query: self.query.unwrap_or_default(),
            logging: self.logging.unwrap_or_default(),
        }
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build_validated(self) -> Result<WrenConfig, ConfigError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WrenConfig::default();
        assert!(config.router.strict_use);
        assert_eq!(config.query.max_keys, 1000);
        assert!(config.logging.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_partial() {
        let config = WrenConfig::builder()
            .router(RouterSection { strict_use: false })
            .build();

        assert!(!config.router.strict_use);
        assert_eq!(config.query, QuerySection::default());
    }

    #[test]
    fn test_builder_validated_rejects_bad_level() {
        let result = WrenConfig::builder()
            .logging(LoggingSection {
                level: String::new(),
                ..Default::default()
            })
            .build_validated();

        assert!(matches!(result, Err(ConfigError::InvalidValue { field, .. }) if field == "logging.level"));
    }

    #[test]
    fn test_disabled_logging_skips_level_check() {
        let config = WrenConfig::builder()
            .logging(LoggingSection {
                enabled: false,
                level: String::new(),
                ..Default::default()
            })
            .build();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        let dev = WrenConfig::development();
        assert_eq!(dev.logging.format, LogFormat::Pretty);
        assert!(dev.logging.include_location);
        assert!(dev.router.strict_use);

        let prod = WrenConfig::production();
        assert_eq!(prod.logging.format, LogFormat::Json);
        assert_eq!(prod.router_settings(), RouterSettings::permissive());
    }

    #[test]
    fn test_runtime_conversions() {
        let config = WrenConfig::builder()
            .query(QuerySection { max_keys: 3 })
            .build();
        assert_eq!(config.query_options().max_keys, 3);
        assert_eq!(config.log_config().level, "info");
        assert!(config.router_settings().strict_use);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result: Result<WrenConfig, _> = toml::from_str("[server]\nport = 1");
        assert!(result.is_err());
    }
}
