use craftbook_core::validation::Strictness;
use serde::Deserialize;
use std::path::Path;

use crate::error::PluginError;

/// File name of the optional settings file inside the data directory.
pub const SETTINGS_FILE: &str = "craftbook.ron";

/// Manager settings. Every field is optional in the settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ManagerSettings {
    /// Namespace recipe identifiers are registered under.
    pub namespace: String,
    /// How incomplete recipe definitions are treated.
    pub strictness: Strictness,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self {
            namespace: "craftbook".to_string(),
            strictness: Strictness::Strict,
            log_filter: "info".to_string(),
        }
    }
}

/// Load settings from `craftbook.ron` in `data_dir`, or defaults if the file
/// does not exist.
pub fn load_settings(data_dir: &Path) -> Result<ManagerSettings, PluginError> {
    let path = data_dir.join(SETTINGS_FILE);
    if !path.exists() {
        return Ok(ManagerSettings::default());
    }
    let content = std::fs::read_to_string(&path)?;
    ron::from_str(&content).map_err(|e| PluginError::Settings {
        file: path,
        detail: e.to_string(),
    })
}
