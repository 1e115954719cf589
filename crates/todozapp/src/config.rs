use crate::error::{Result, TodozError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "todos.json";

/// Configuration for todoz, stored as config.json next to the data slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodozConfig {
    /// Filename of the data slot inside the store directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for TodozConfig {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl TodozConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodozError::Io)?;
        let config: TodozConfig =
            serde_json::from_str(&content).map_err(TodozError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodozError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodozError::Serialization)?;
        fs::write(config_path, content).map_err(TodozError::Io)?;
        Ok(())
    }

    pub fn get_data_file(&self) -> &str {
        &self.data_file
    }

    /// Set the data file name (falls back to the default when blank)
    pub fn set_data_file(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.data_file = DEFAULT_DATA_FILE.to_string();
        } else {
            self.data_file = name.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TodozConfig::default();
        assert_eq!(config.data_file, "todos.json");
    }

    #[test]
    fn test_set_data_file() {
        let mut config = TodozConfig::default();
        config.set_data_file("errands.json");
        assert_eq!(config.data_file, "errands.json");
    }

    #[test]
    fn test_set_data_file_blank_restores_default() {
        let mut config = TodozConfig::default();
        config.set_data_file("errands.json");
        config.set_data_file("   ");
        assert_eq!(config.data_file, "todos.json");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = TodozConfig::load(dir.path()).unwrap();
        assert_eq!(config, TodozConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = TodozConfig::default();
        config.set_data_file("errands.json");
        config.save(dir.path()).unwrap();

        let loaded = TodozConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "errands.json");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = TodozConfig {
            data_file: "other.json".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TodozConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
