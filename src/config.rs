use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolkitError};

pub const LOG_FILTER_ENV: &str = "ADDRESS_TOOLKIT_LOG";
pub const LOG_FORMAT_ENV: &str = "ADDRESS_TOOLKIT_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
            ansi: default_ansi(),
        }
    }
}

fn default_filter() -> String {
    "info".into()
}

fn default_ansi() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&raw)
            .map_err(|err| ToolkitError::Config(format!("Failed to parse configuration: {err}")))?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        cfg.apply_env_overrides();
        cfg
    }

    pub fn from_env_or_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut cfg = Self::from_file(path)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(filter) = env::var(LOG_FILTER_ENV) {
            if !filter.trim().is_empty() {
                self.logging.filter = filter;
            }
        }
        if let Ok(format) = env::var(LOG_FORMAT_ENV) {
            if let Some(parsed) = LogFormat::parse(&format) {
                self.logging.format = parsed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Serializes tests that mutate the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn defaults_without_file() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.logging.filter, "info");
        assert_eq!(cfg.logging.format, LogFormat::Pretty);
        assert!(cfg.logging.ansi);
    }

    #[test]
    fn loads_and_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[logging]\nfilter='address_toolkit=debug'\nformat='pretty'\nansi=false"
        )
        .unwrap();

        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        env::remove_var(LOG_FILTER_ENV);
        env::set_var(LOG_FORMAT_ENV, "JSON");
        let cfg = AppConfig::from_env_or_file(file.path()).unwrap();
        env::remove_var(LOG_FORMAT_ENV);

        assert_eq!(cfg.logging.filter, "address_toolkit=debug");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert!(!cfg.logging.ansi);
    }

    #[test]
    fn from_env_applies_filter_override() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        env::remove_var(LOG_FORMAT_ENV);

        env::set_var(LOG_FILTER_ENV, "address_toolkit=trace");
        let overridden = AppConfig::from_env();

        env::set_var(LOG_FILTER_ENV, "   ");
        let blank = AppConfig::from_env();

        env::remove_var(LOG_FILTER_ENV);
        let unset = AppConfig::from_env();

        assert_eq!(overridden.logging.filter, "address_toolkit=trace");
        assert_eq!(overridden.logging.format, LogFormat::Pretty);
        assert_eq!(blank.logging.filter, "info");
        assert_eq!(unset, AppConfig::default());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let file = NamedTempFile::new().unwrap();
        let cfg = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nformat='xml'").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ToolkitError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::from_file("/nonexistent/address-toolkit.toml").unwrap_err();
        assert!(matches!(err, ToolkitError::Io(_)));
    }

    #[test]
    fn unknown_format_override_is_ignored() {
        assert_eq!(LogFormat::parse("xml"), None);
        assert_eq!(LogFormat::parse(" Pretty "), Some(LogFormat::Pretty));
    }
}
