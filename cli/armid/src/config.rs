//! Configuration (env-driven).

use anyhow::{bail, Result};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Default output format, overridden by `--output`.
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            output: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = lookup("ARMID_LOG_LEVEL").unwrap_or(defaults.log_level);

        let output = match lookup("ARMID_OUTPUT") {
            None => defaults.output,
            Some(value) => match OutputFormat::from_name(&value) {
                Some(format) => format,
                None => bail!("ARMID_OUTPUT must be 'table' or 'json', got '{value}'."),
            },
        };

        Ok(Self { log_level, output })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output, OutputFormat::Table);
    }

    #[test]
    fn test_config_from_env_values() {
        let config = Config::from_lookup(|key| match key {
            "ARMID_LOG_LEVEL" => Some("debug".to_string()),
            "ARMID_OUTPUT" => Some("JSON".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_config_rejects_unknown_output() {
        let result = Config::from_lookup(|key| (key == "ARMID_OUTPUT").then(|| "yaml".to_string()));
        assert!(result.is_err());
    }
}
