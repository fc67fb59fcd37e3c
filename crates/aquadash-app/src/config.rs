//! Configuration file parsing
//!
//! Supports `.aquadash/config.toml` in the directory AquaDash is started
//! from. Missing or unparseable files fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const AQUADASH_DIR: &str = ".aquadash";
const CONFIG_FILENAME: &str = "config.toml";

/// Global application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
}

/// UI-related settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Icon rendering mode for the theme's icon set
    pub icons: IconMode,
}

/// Icon rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe characters that work in all terminals
    #[default]
    Unicode,
    /// Rich Nerd Font glyphs (requires a Nerd Font installed)
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// Load settings from `<base>/.aquadash/config.toml`, defaulting on any
/// failure. A broken config file should never stop the dashboard.
pub fn load_settings(base_path: &Path) -> Settings {
    let config_path = base_path.join(AQUADASH_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}
