//! Demo settings persistence.
//!
//! JSON settings for the demo application: stepper configuration, theme, and
//! per-step labels. The widget itself persists nothing; this module only
//! serves the demo binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::models::StepperConfig;
use crate::paint::StepperStyle;

/// Labels for one step in the demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLabel {
    pub primary: String,
    pub secondary: String,
}

/// Everything the demo persists between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoSettings {
    pub stepper: StepperConfig,
    pub style: StepperStyle,
    #[serde(default)]
    pub step_labels: Vec<StepLabel>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        DemoSettings {
            stepper: StepperConfig::default(),
            style: StepperStyle::default(),
            step_labels: Vec::new(),
        }
    }
}

/// Settings path: `~/.config/stepper-demo/settings.json`.
pub fn get_settings_path() -> Result<PathBuf, SettingsError> {
    let home = dirs::home_dir()
        .ok_or_else(|| SettingsError::PathUnavailable("cannot determine home directory".to_string()))?;
    Ok(home.join(".config/stepper-demo").join("settings.json"))
}

/// Load settings from a JSON file.
pub fn load_settings_from_file(path: &Path) -> Result<DemoSettings, SettingsError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SettingsError::FileNotFound(path.display().to_string())
        } else {
            SettingsError::IoError(e)
        }
    })?;
    let settings: DemoSettings = serde_json::from_str(&content)?;
    Ok(settings)
}

/// Save settings to a JSON file, creating parent directories as needed.
pub fn save_settings_to_file(settings: &DemoSettings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from the default path, falling back to defaults when the
/// file is missing or unreadable.
pub fn load_or_default() -> DemoSettings {
    match get_settings_path().and_then(|path| load_settings_from_file(&path)) {
        Ok(settings) => settings,
        Err(SettingsError::FileNotFound(_)) => DemoSettings::default(),
        Err(e) => {
            log::warn!("failed to load demo settings, using defaults: {}", e);
            DemoSettings::default()
        }
    }
}
