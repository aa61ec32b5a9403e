use crate::api::{ContactsApi, ContactsPaths};
use crate::config::ContactsConfig;
use crate::error::{ContactsError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "CONTACTZ_HOME";

pub struct ContactsContext {
    pub api: ContactsApi<FileStore>,
    pub config: ContactsConfig,
}

/// Resolve the data directory. Precedence: explicit flag, `CONTACTZ_HOME`,
/// then the platform data dir.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }

    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "contactz", "contactz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ContactsError::Config("Could not determine data directory".to_string()))
}

pub fn initialize(data_dir: &Path) -> ContactsContext {
    let config = match ContactsConfig::load(data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "could not read config, using defaults");
            ContactsConfig::default()
        }
    };

    let store_file = config.store_path(data_dir);
    debug!(store = %store_file.display(), strict = config.strict_records, "opening store");

    let store = FileStore::new(store_file.clone()).with_strict(config.strict_records);
    let paths = ContactsPaths {
        data_dir: data_dir.to_path_buf(),
        store_file,
    };
    let api = ContactsApi::new(store, paths);

    ContactsContext { api, config }
}
