//! Configuration loading and saving utilities.
//!
//! Handles paths and persistence for:
//! - Monitor configuration (cat confidence threshold)
//! - The security state file written by the store

use std::path::PathBuf;

use fs_err as fs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SecurityError};

/// Confidence handed to the image analyzer when none is configured.
pub const DEFAULT_CAT_CONFIDENCE: f32 = 50.0;

/// Returns the path to the Homewatch data directory (~/.homewatch).
pub fn get_homewatch_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".homewatch"))
}

/// Returns the path to the security state file.
pub fn get_store_path() -> Option<PathBuf> {
    get_homewatch_dir().map(|d| d.join("store.json"))
}

/// Returns the path to the monitor configuration file.
pub fn get_config_path() -> Option<PathBuf> {
    get_homewatch_dir().map(|d| d.join("monitor.json"))
}

/// Returns the directory CLI log files are written to.
pub fn get_log_dir() -> Option<PathBuf> {
    get_homewatch_dir().map(|d| d.join("logs"))
}

/// Monitor configuration (analyzer confidence, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default = "default_cat_confidence")]
    pub cat_confidence_threshold: f32,
}

fn default_cat_confidence() -> f32 {
    DEFAULT_CAT_CONFIDENCE
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            cat_confidence_threshold: DEFAULT_CAT_CONFIDENCE,
        }
    }
}

/// Loads the monitor configuration, returning defaults if the file doesn't
/// exist or doesn't parse.
pub fn load_monitor_config() -> MonitorConfig {
    get_config_path()
        .and_then(|p| fs::read_to_string(&p).ok())
        .and_then(|c| serde_json::from_str(&c).ok())
        .unwrap_or_default()
}

/// Saves the monitor configuration to disk.
pub fn save_monitor_config(config: &MonitorConfig) -> Result<()> {
    let path = get_config_path().ok_or(SecurityError::HomeDirNotFound)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SecurityError::ConfigWriteFailed {
            path: path.clone(),
            source: e,
        })?;
    }
    let content = serde_json::to_string_pretty(config).map_err(|e| SecurityError::Json {
        context: "serializing monitor config".to_string(),
        source: e,
    })?;
    fs::write(&path, content).map_err(|e| SecurityError::ConfigWriteFailed { path, source: e })
}
