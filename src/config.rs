//! Widget configuration persistence
//!
//! Stores page-wide widget settings in `~/.config/inplace/config.yaml`.
//! These are the knobs a page would otherwise set globally: control icons
//! and the authenticity token used by non-remote submissions.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Page-wide widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Icon identifier for the submit control
    #[serde(default = "default_submit_icon")]
    pub submit_icon: String,

    /// Icon identifier for the cancel control
    #[serde(default = "default_cancel_icon")]
    pub cancel_icon: String,

    /// Icon identifier for the delete control
    #[serde(default = "default_delete_icon")]
    pub delete_icon: String,

    /// Authenticity token embedded in non-remote forms
    #[serde(default)]
    pub csrf_token: Option<String>,

    /// Class list applied to the text input
    #[serde(default = "default_input_class")]
    pub input_class: String,
}

fn default_submit_icon() -> String {
    "save".to_string()
}

fn default_cancel_icon() -> String {
    "cancel".to_string()
}

fn default_delete_icon() -> String {
    "delete".to_string()
}

fn default_input_class() -> String {
    "form-control".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            submit_icon: default_submit_icon(),
            cancel_icon: default_cancel_icon(),
            delete_icon: default_delete_icon(),
            csrf_token: None,
            input_class: default_input_class(),
        }
    }
}

impl WidgetConfig {
    /// Load config from the default location, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load config from an explicit file, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to an explicit file
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
