use crate::error::{EduError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_FILE: &str = "education.json";

/// Configuration for eduhist, stored in the data directory as config.json.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EduConfig {
    /// File name of the persisted entry store (e.g. "education.json")
    #[serde(default = "default_storage_file")]
    pub storage_file: String,
}

fn default_storage_file() -> String {
    DEFAULT_STORAGE_FILE.to_string()
}

impl Default for EduConfig {
    fn default() -> Self {
        Self {
            storage_file: DEFAULT_STORAGE_FILE.to_string(),
        }
    }
}

impl EduConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(EduError::Io)?;
        let config: EduConfig = serde_json::from_str(&content).map_err(EduError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(EduError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(EduError::Serialization)?;
        fs::write(config_path, content).map_err(EduError::Io)?;
        Ok(())
    }

    pub fn storage_file(&self) -> &str {
        &self.storage_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = EduConfig::default();
        assert_eq!(config.storage_file, "education.json");
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let config = EduConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, EduConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = EduConfig {
            storage_file: "history.json".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = EduConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.storage_file, "history.json");
    }

    #[test]
    fn serialization_roundtrip() {
        let config = EduConfig {
            storage_file: "records.json".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: EduConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
