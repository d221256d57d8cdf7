use crate::error::{Result, SwimlaneError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Swimlane settings, read from a JSON file by the host application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwimlaneConfig {
    /// Directory under the project root that holds swimlane files
    pub storage_dir: String,
    /// Popup opened from a swimlane header
    pub action_menu_id: String,
}

impl SwimlaneConfig {
    pub const DEFAULT_STORAGE_DIR: &'static str = ".swimlanes";
    pub const DEFAULT_ACTION_MENU_ID: &'static str = "swimlaneAction";

    /// Loads the configuration, filling missing fields with defaults
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            SwimlaneError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&contents).map_err(|e| {
            SwimlaneError::ConfigError(format!("invalid {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), "loaded swimlane config");
        Ok(config)
    }
}

impl Default for SwimlaneConfig {
    fn default() -> Self {
        Self {
            storage_dir: Self::DEFAULT_STORAGE_DIR.to_string(),
            action_menu_id: Self::DEFAULT_ACTION_MENU_ID.to_string(),
        }
    }
}
