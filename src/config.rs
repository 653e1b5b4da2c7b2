//! User configuration loaded from a TOML file.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_DIR: &str = "keycalc";
const CONFIG_FILE: &str = "config.toml";

/// Settings read from `config.toml`. Missing keys take their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Show the scientific button group at startup.
    pub scientific: bool,
    /// Copy every computed result to the clipboard.
    pub auto_copy: bool,
    /// Prompt printed before each input line.
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scientific: false,
            auto_copy: false,
            prompt: "> ".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load configuration.
    ///
    /// With an explicit path the file must exist. Otherwise the default
    /// location is tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }
}

/// `~/.config/keycalc/config.toml` or the platform equivalent.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml("scientific = true\nprompt = \"calc> \"").unwrap();
        assert!(config.scientific);
        assert!(!config.auto_copy);
        assert_eq!(config.prompt, "calc> ");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(Config::from_toml("scientific = \"yes\"").is_err());
        assert!(Config::from_toml("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = std::env::temp_dir().join("keycalc-missing-config-file.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path =
            std::env::temp_dir().join(format!("keycalc-config-{}.toml", std::process::id()));
        fs::write(&path, "auto_copy = true\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(config.auto_copy);
        assert!(!config.scientific);
    }
}
