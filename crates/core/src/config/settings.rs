use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ToolchainConfig, WaitConfig};
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".lazy.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Replaces the detected home directory as the base of project directories
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects_home: Option<PathBuf>,

    /// Compile commands keyed by extension token, overriding the built-ins
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub toolchains: BTreeMap<String, ToolchainConfig>,

    /// Extra environment for compile and run processes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,

    #[serde(default)]
    pub wait: WaitConfig,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// `~/.lazy.json`, if it exists
    pub fn find_config_file() -> Option<PathBuf> {
        let path = dirs::home_dir()?.join(CONFIG_FILE_NAME);
        path.is_file().then_some(path)
    }

    /// Load the explicitly given file, or the default one when present.
    ///
    /// An explicit path must exist; a missing default file yields the
    /// default configuration.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::Config(format!(
                        "Config file {} does not exist",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => Self::find_config_file(),
        };

        match path {
            Some(path) => {
                debug!("Loading config file: {}", path.display());
                Ok((Self::load_from_file(&path)?, Some(path)))
            }
            None => {
                debug!("No config file found, using defaults");
                Ok((Self::default(), None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "wait": { "timeout_secs": 5 } }"#).unwrap();
        assert_eq!(config.wait.timeout_secs, 5);
        assert_eq!(config.wait.initial_poll_ms, WaitConfig::default().initial_poll_ms);
        assert!(config.toolchains.is_empty());
        assert!(config.projects_home.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config
            .toolchains
            .insert("c".into(), ToolchainConfig::new("clang", &["{source}", "-o", "{output}"]));
        config.env.insert("CFLAGS".into(), "-O2".into());
        config.save_to_file(&path).unwrap();

        let (loaded, used) = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(used, Some(path));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load(Some(&temp.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load_from_file(&path), Err(Error::Config(_))));
    }
}
