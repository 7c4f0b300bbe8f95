// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[api]` - Backend location and access token
//! - `[editors]` - External editor entry points
//! - `[imagery]` - Custom background imagery handed to editors
//! - `[display]` - AOI list display settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `AOI_PANEL_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use aoi_panel::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("page size: {:?}", config.display.page_size);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::editor_links::Imagery;
use crate::domain::ui::PageSize;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Root URL of the backend API.
    #[serde(default = "default_api_base_url")]
    pub base_url: String,

    /// Access token sent with backend requests.
    ///
    /// The CLI flag and the environment variable take precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            access_token: None,
        }
    }
}

/// External editor settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorsConfig {
    /// RapiD editor entry point.
    #[serde(default = "default_rapid_url")]
    pub rapid_url: String,

    /// iD editor entry point.
    #[serde(default = "default_osm_url")]
    pub osm_url: String,
}

impl Default for EditorsConfig {
    fn default() -> Self {
        Self {
            rapid_url: default_rapid_url(),
            osm_url: default_osm_url(),
        }
    }
}

/// Background imagery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ImageryConfig {
    /// Tile URL of custom imagery (e.g. OpenAerialMap). Editors fall back to Bing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
}

impl ImageryConfig {
    /// Returns the configured imagery, ignoring blank URLs.
    #[must_use]
    pub fn imagery(&self) -> Option<Imagery> {
        self.custom_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(Imagery::new)
    }
}

/// AOI list display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Number of AOIs per page.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl DisplayConfig {
    /// Returns the page size, clamped to the supported range.
    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size.map(PageSize::new).unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Backend API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// External editor settings.
    #[serde(default)]
    pub editors: EditorsConfig,

    /// Background imagery settings.
    #[serde(default)]
    pub imagery: ImageryConfig,

    /// AOI list display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_rapid_url() -> String {
    DEFAULT_RAPID_URL.to_string()
}

fn default_osm_url() -> String {
    DEFAULT_OSM_EDITOR_URL.to_string()
}

fn default_page_size() -> Option<usize> {
    Some(DEFAULT_PAGE_SIZE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
