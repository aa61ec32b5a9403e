use crate::error::{ContactsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.dat";

pub const KEY_DATA_FILE: &str = "data-file";
pub const KEY_STRICT_RECORDS: &str = "strict-records";

/// Configuration for contactz, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactsConfig {
    /// File name of the record store, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Fail instead of dropping a partial record at the end of the store
    #[serde(default)]
    pub strict_records: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            strict_records: false,
        }
    }
}

impl ContactsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ContactsError::Io)?;
        let config: ContactsConfig =
            serde_json::from_str(&content).map_err(ContactsError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ContactsError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ContactsError::Serialization)?;
        fs::write(config_path, content).map_err(ContactsError::Io)?;
        Ok(())
    }

    /// Full path of the record store inside `data_dir`
    pub fn store_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.data_file)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_DATA_FILE => Some(self.data_file.clone()),
            KEY_STRICT_RECORDS => Some(self.strict_records.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_DATA_FILE => {
                let value = value.trim();
                if value.is_empty()
                    || value == "."
                    || value == ".."
                    || value == CONFIG_FILENAME
                    || value.contains(|c: char| c == '/' || c == '\\')
                {
                    return Err(ContactsError::Config(format!(
                        "{} must be a plain file name, got '{}'",
                        KEY_DATA_FILE, value
                    )));
                }
                self.data_file = value.to_string();
            }
            KEY_STRICT_RECORDS => {
                self.strict_records = match value.trim().to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(ContactsError::Config(format!(
                            "{} expects true or false, got '{}'",
                            KEY_STRICT_RECORDS, other
                        )))
                    }
                };
            }
            other => {
                return Err(ContactsError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[KEY_DATA_FILE, KEY_STRICT_RECORDS]
    }
}
