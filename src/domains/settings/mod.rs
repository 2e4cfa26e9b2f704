//! Settings domain module.
//!
//! User settings are not persisted yet: reads return the defaults and updates
//! are accepted and logged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::info;

/// Acknowledgement returned for a settings update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub message: String,
}

/// The settings every client starts with.
pub fn default_settings() -> Map<String, Value> {
    let defaults = json!({
        "theme": "light",
        "language": "en",
        "fontSize": "medium",
        "autoSave": true,
        "toolHistory": true,
    });

    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Accept a settings update.
pub fn update_settings(settings: &Map<String, Value>) -> SettingsUpdate {
    let keys: Vec<&str> = settings.keys().map(String::as_str).collect();
    info!(?keys, "Settings updated");

    SettingsUpdate {
        message: "Settings updated successfully".to_string(),
    }
}
