//! Process configuration, resolved once at startup and read-only afterward.
//!
//! Precedence per setting: CLI flag > environment variable > config file >
//! built-in default. The config file is YAML, discovered at the container
//! path `/config/config.yaml` or the working directory unless an explicit
//! path is given.

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::cli::Args;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

const CONTAINER_CONFIG_PATH: &str = "/config/config.yaml";
const LOCAL_CONFIG_PATH: &str = "config.yaml";

/// Fatal startup failures. A missing config file is not one of these; a
/// present-but-broken file is.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("fatal error config file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("'{0}' is an invalid port value")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_owned(),
            format: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub port: u16,
    pub log: LogConfig,
    pub apikey: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log: LogConfig::default(),
            apikey: String::new(),
        }
    }
}

impl Config {
    /// Resolve configuration from every source, flags winning over
    /// environment variables, which win over the file.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match discover_file(args.config.as_deref())? {
            Some((path, contents)) => Self::from_yaml(&contents)
                .map_err(|source| ConfigError::Malformed { path, source })?,
            None => Self::default(),
        };

        config.apply_env(|name| std::env::var(name).ok())?;
        config.apply_flags(args);

        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(contents)
    }

    /// Overlay environment variables; `var` is injectable for tests.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(port) = var("PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.log.format = format;
        }
        if let Some(apikey) = var("APIKEY") {
            self.apikey = apikey;
        }
        Ok(())
    }

    /// Overlay values provided on the command line.
    pub fn apply_flags(&mut self, args: &Args) {
        if let Some(port) = args.port {
            self.port = port;
        }
        if let Some(level) = &args.log_level {
            self.log.level = level.clone();
        }
        if let Some(format) = &args.log_format {
            self.log.format = format.clone();
        }
        if let Some(apikey) = &args.apikey {
            self.apikey = apikey.clone();
        }
    }
}

/// Locate and read the config file. An explicit path must be readable;
/// discovery candidates may be absent.
fn discover_file(explicit: Option<&Path>) -> Result<Option<(PathBuf, String)>, ConfigError> {
    if let Some(path) = explicit {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(Some((path.to_path_buf(), contents)));
    }

    for candidate in [CONTAINER_CONFIG_PATH, LOCAL_CONFIG_PATH] {
        match std::fs::read_to_string(candidate) {
            Ok(contents) => return Ok(Some((PathBuf::from(candidate), contents))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(source) => {
                return Err(ConfigError::Unreadable {
                    path: PathBuf::from(candidate),
                    source,
                });
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log.level, "INFO");
        assert_eq!(config.log.format, "");
        assert_eq!(config.apikey, "");
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("port: 9090\n").unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.log.level, "INFO");
        assert_eq!(config.apikey, "");
    }

    #[test]
    fn full_yaml_parses() {
        let config = Config::from_yaml(
            "port: 8081\nlog:\n  level: DEBUG\n  format: json\napikey: SECRET\n",
        )
        .unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.log.level, "DEBUG");
        assert_eq!(config.log.format, "json");
        assert_eq!(config.apikey, "SECRET");
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(Config::from_yaml("port: [not a port\n").is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::from_yaml("port: 9090\napikey: FROM_FILE\n").unwrap();
        config
            .apply_env(|name| match name {
                "PORT" => Some("7070".to_owned()),
                "APIKEY" => Some("FROM_ENV".to_owned()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.port, 7070);
        assert_eq!(config.apikey, "FROM_ENV");
        // Untouched settings keep their file values.
        assert_eq!(config.log.level, "INFO");
    }

    #[test]
    fn invalid_port_env_is_fatal() {
        let mut config = Config::default();
        let err = config
            .apply_env(|name| (name == "PORT").then(|| "eighty".to_owned()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(value) if value == "eighty"));
    }

    #[test]
    fn flags_win_over_everything() {
        let mut config = Config::from_yaml("port: 9090\nlog:\n  level: DEBUG\n").unwrap();
        config
            .apply_env(|name| (name == "PORT").then(|| "7070".to_owned()))
            .unwrap();

        let args = Args {
            port: Some(6060),
            log_level: Some("ERROR".to_owned()),
            ..Args::default()
        };
        config.apply_flags(&args);

        assert_eq!(config.port, 6060);
        assert_eq!(config.log.level, "ERROR");
    }

    #[test]
    fn explicit_config_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "port: 8082\napikey: FILE_KEY\n").unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Args::default()
        };
        let config = Config::load(&args).unwrap();
        assert_eq!(config.port, 8082);
        assert_eq!(config.apikey, "FILE_KEY");
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let args = Args {
            config: Some(PathBuf::from("/nonexistent/config.yaml")),
            ..Args::default()
        };
        let err = Config::load(&args).unwrap_err();
        assert!(matches!(err, ConfigError::Unreadable { .. }));
    }

    #[test]
    fn malformed_explicit_config_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "port: [broken\n").unwrap();

        let args = Args {
            config: Some(file.path().to_path_buf()),
            ..Args::default()
        };
        let err = Config::load(&args).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
        assert!(err.to_string().starts_with("fatal error config file"));
    }
}
