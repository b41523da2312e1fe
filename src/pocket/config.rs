use crate::error::{PocketError, Result};
use crate::language::Language;
use crate::store::persistence::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for pocket, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PocketConfig {
    /// Name of the storage slot holding the collection
    pub storage_key: String,

    /// Language preselected for new snippets
    pub default_language: Language,

    /// Where exported files go when no directory is given (current directory if unset)
    pub export_dir: Option<PathBuf>,
}

impl Default for PocketConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_language: Language::JavaScript,
            export_dir: None,
        }
    }
}

impl PocketConfig {
    pub const KEYS: [&'static str; 3] = ["storage-key", "default-language", "export-dir"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PocketError::Io)?;
        let config: PocketConfig =
            serde_json::from_str(&content).map_err(PocketError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PocketError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PocketError::Serialization)?;
        fs::write(config_path, content).map_err(PocketError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "default-language" => Some(self.default_language.to_string()),
            "export-dir" => Some(
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                let valid = !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
                if !valid {
                    return Err(PocketError::Api(format!(
                        "Invalid storage key '{}': use letters, digits, '-' or '_'",
                        value
                    )));
                }
                self.storage_key = value.to_string();
            }
            "default-language" => {
                self.default_language = Language::from_tag(value)
                    .ok_or_else(|| PocketError::Api(format!("Unknown language: {}", value)))?;
            }
            "export-dir" => {
                self.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(PocketError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
