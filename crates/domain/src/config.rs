//! Runtime configuration for the rules core.
//!
//! The only tunable business parameter is the near-deadline warning band;
//! everything else here is ambient (logging level/format for the embedding
//! application to consume).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub sla: SlaConfig,
    pub logging: LoggingConfig,
}

/// SLA warning-band configuration.
///
/// The near-deadline threshold is a product-owned parameter, not a fixed
/// constant: the effective band is the lesser of `near_fraction` of the total
/// SLA window and `near_window_hours`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlaConfig {
    #[serde(default = "default_near_window_hours")]
    pub near_window_hours: i64,

    #[serde(default = "default_near_fraction")]
    pub near_fraction: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_near_window_hours() -> i64 {
    4
}
fn default_near_fraction() -> f64 {
    0.20
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with HD__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("HD").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// This method creates a config entirely from defaults and overrides,
    /// without relying on config files (which may not be accessible during tests).
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        // Embed defaults directly to avoid file system dependency in tests
        let defaults = r#"
            [sla]
            near_window_hours = 4
            near_fraction = 0.20

            [logging]
            level = "info"
            format = "json"
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.sla.near_window_hours <= 0 {
            return Err(ConfigValidationError::InvalidValue(
                "near_window_hours must be positive".to_string(),
            ));
        }

        if self.sla.near_fraction <= 0.0 || self.sla.near_fraction > 1.0 {
            return Err(ConfigValidationError::InvalidValue(
                "near_fraction must be in (0, 1]".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_with_defaults() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");

        assert_eq!(config.sla.near_window_hours, 4);
        assert!((config.sla.near_fraction - 0.20).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_config_override() {
        let config = Config::load_for_test(&[
            ("sla.near_window_hours", "12"),
            ("logging.level", "debug"),
        ])
        .expect("Failed to load config");

        assert_eq!(config.sla.near_window_hours, 12);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_validation_rejects_zero_window() {
        let result = Config::load_for_test(&[("sla.near_window_hours", "0")]);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("near_window_hours"));
    }

    #[test]
    fn test_config_validation_rejects_bad_fraction() {
        let result = Config::load_for_test(&[("sla.near_fraction", "1.5")]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("near_fraction"));

        let result = Config::load_for_test(&[("sla.near_fraction", "0.0")]);
        assert!(result.is_err());
    }
}
