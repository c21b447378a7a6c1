//! Configuration for the mdb shell.
//!
//! Loaded from a TOML file whose path comes from `--config` or
//! `MDB_CONFIG_PATH`. Without a file the defaults apply.
//!
//! ```toml
//! [logger]
//! level = "info"   # trace | debug | info | warn | error
//! mode = "prod"    # devel | prod
//! ```

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Log levels accepted in the config file.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to open config file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode config file {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("config validation failed: {0}")]
    Invalid(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub logger: LoggerConfig,
}

/// Logger settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Minimum level, one of [`LOG_LEVELS`]
    pub level: String,
    /// Output flavour: `devel` or `prod`
    pub mode: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            mode: LogMode::Prod.to_string(),
        }
    }
}

impl LoggerConfig {
    /// The parsed output mode. Only meaningful after [`Config::validate`].
    pub fn log_mode(&self) -> LogMode {
        self.mode.parse().unwrap_or_default()
    }
}

/// How log lines are formatted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogMode {
    /// Colours, targets and line numbers for local development
    Devel,
    /// Plain lines with timestamps
    #[default]
    Prod,
}

impl fmt::Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogMode::Devel => "devel",
            LogMode::Prod => "prod",
        })
    }
}

impl FromStr for LogMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "devel" => Ok(LogMode::Devel),
            "prod" => Ok(LogMode::Prod),
            "" => Err(ConfigError::Invalid("logger.mode must not be empty".into())),
            other => Err(ConfigError::Invalid(format!(
                "logger.mode must be 'devel' or 'prod', got '{other}'"
            ))),
        }
    }
}

impl Config {
    /// Reads, decodes and validates the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logger.level.as_str();
        if level.is_empty() {
            return Err(ConfigError::Invalid("logger.level must not be empty".into()));
        }
        if !LOG_LEVELS.contains(&level) {
            return Err(ConfigError::Invalid(format!(
                "logger.level must be one of {LOG_LEVELS:?}, got '{level}'"
            )));
        }

        self.logger.mode.parse::<LogMode>()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_success() {
        let file = write_config(
            r#"
[logger]
level = "info"
mode = "prod"
"#,
        );

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logger.level, "info");
        assert_eq!(config.logger.log_mode(), LogMode::Prod);
    }

    #[test]
    fn test_load_devel() {
        let file = write_config("[logger]\nlevel = \"debug\"\nmode = \"devel\"\n");

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logger.log_mode(), LogMode::Devel);
    }

    #[test]
    fn test_defaults_without_path() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path().join("missing.toml")).unwrap_err();

        assert!(matches!(err, ConfigError::Open { .. }));
        assert!(err.to_string().starts_with("unable to open config file"));
    }

    #[test]
    fn test_invalid_toml() {
        let file = write_config("[logger]\nlevel = \"info\nmode = \"prod\"\n");

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("unable to decode config file"));
    }

    #[test]
    fn test_missing_field() {
        let file = write_config("[logger]\nlevel = \"info\"\n");

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Decode { .. }));
    }

    #[test]
    fn test_invalid_values() {
        for (level, mode) in [("verbose", "prod"), ("info", "staging"), ("", "prod"), ("info", "")] {
            let file = write_config(&format!(
                "[logger]\nlevel = \"{level}\"\nmode = \"{mode}\"\n"
            ));

            let err = Config::load(file.path()).unwrap_err();
            assert!(
                err.to_string().starts_with("config validation failed"),
                "level={level:?} mode={mode:?}: {err}"
            );
        }
    }
}
