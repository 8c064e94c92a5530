use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Indent JSON documents written to stdout
    #[serde(default = "default_true")]
    pub pretty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for published documents; empty means ~/.run-coach/data
    #[serde(default)]
    pub data_dir: String,

    /// Name recorded as the sender of data-bus alerts
    #[serde(default = "default_sender")]
    pub sender: String,

    /// Publish every output document without passing --publish
    #[serde(default)]
    pub publish: bool,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_sender() -> String {
    "run_coach".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: default_true(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            sender: default_sender(),
            publish: false,
        }
    }
}

impl Config {
    /// Get config directory path (~/.run-coach/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".run-coach"))
    }

    /// Get config file path (~/.run-coach/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Resolve an explicit path or fall back to the default location
    pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, using defaults when it does not exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_file = Self::resolve_path(path)?;

        if !config_file.exists() {
            tracing::debug!("Config file {} not found, using defaults", config_file.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_file).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_file = Self::resolve_path(path)?;
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_file, contents).context("Failed to write config file")?;

        Ok(config_file)
    }

    /// Directory the document sink writes under
    pub fn data_dir(&self) -> Result<PathBuf> {
        if self.storage.data_dir.is_empty() {
            Ok(Self::config_dir()?.join("data"))
        } else {
            Ok(PathBuf::from(&self.storage.data_dir))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.output.pretty);
        assert!(!config.storage.publish);
        assert_eq!(config.storage.sender, "run_coach");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(config.output.pretty, deserialized.output.pretty);
        assert_eq!(config.storage.sender, deserialized.storage.sender);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[storage]\npublish = true\n").unwrap();
        assert!(config.storage.publish);
        assert!(config.output.pretty);
        assert_eq!(config.storage.sender, "run_coach");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(config.storage.data_dir.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.storage.data_dir = "/tmp/run-coach-data".to_string();
        config.save(Some(&path)).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.data_dir().unwrap(), PathBuf::from("/tmp/run-coach-data"));
    }
}
