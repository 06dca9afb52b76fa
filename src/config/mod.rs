// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[backend]` - Generation backend location, polling and timeouts
//! - `[lightbox]` - Overlay timing and scroll compensation
//! - `[form]` - Initial values of the generation form
//!
//! # Examples
//!
//! ```no_run
//! use gallery_lens::config::{self, Config};
//!
//! let (config, _warning) = config::load();
//! println!("backend: {}", config.backend.base_url());
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::generation::AspectRatio;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

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

/// Generation backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackendConfig {
    /// Base URL the `/generate`, `/task_status`, `/images` and `/output`
    /// endpoints are resolved against.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Seconds between two status checks of the same task.
    #[serde(
        default = "default_poll_interval_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub poll_interval_secs: Option<u64>,

    /// HTTP request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_secs: default_poll_interval_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendConfig {
    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Poll interval clamped to the supported range.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        let secs = self
            .poll_interval_secs
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS)
            .clamp(MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS);
        Duration::from_secs(secs)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

/// Lightbox overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Delay in milliseconds before the scroll compensation padding is removed.
    #[serde(
        default = "default_padding_removal_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub padding_removal_delay_ms: Option<u64>,

    /// Width of the gallery scrollbar to compensate while open.
    #[serde(
        default = "default_scrollbar_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub scrollbar_width: Option<f32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            padding_removal_delay_ms: default_padding_removal_delay_ms(),
            scrollbar_width: default_scrollbar_width(),
        }
    }
}

impl LightboxConfig {
    #[must_use]
    pub fn padding_removal_delay(&self) -> Duration {
        Duration::from_millis(
            self.padding_removal_delay_ms
                .unwrap_or(DEFAULT_PADDING_REMOVAL_DELAY_MS),
        )
    }

    #[must_use]
    pub fn scrollbar_width(&self) -> f32 {
        self.scrollbar_width
            .unwrap_or(DEFAULT_SCROLLBAR_WIDTH)
            .max(0.0)
    }
}

/// Initial values of the generation form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_aspect_ratio: Option<AspectRatio>,

    #[serde(
        default = "default_num_images",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_num_images: Option<u32>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_aspect_ratio: Some(AspectRatio::default()),
            default_num_images: default_num_images(),
        }
    }
}

impl FormConfig {
    #[must_use]
    pub fn num_images(&self) -> u32 {
        self.default_num_images
            .unwrap_or(DEFAULT_NUM_IMAGES)
            .clamp(MIN_NUM_IMAGES, MAX_NUM_IMAGES)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub form: FormConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BACKEND_URL.to_string())
}

fn default_poll_interval_secs() -> Option<u64> {
    Some(DEFAULT_POLL_INTERVAL_SECS)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_padding_removal_delay_ms() -> Option<u64> {
    Some(DEFAULT_PADDING_REMOVAL_DELAY_MS)
}

fn default_scrollbar_width() -> Option<f32> {
    Some(DEFAULT_SCROLLBAR_WIDTH)
}

fn default_num_images() -> Option<u32> {
    Some(DEFAULT_NUM_IMAGES)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default config");
            (
                Config::default(),
                Some(format!("{}: {}", path.display(), err)),
            )
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Writing
// =============================================================================

/// Writes configuration to a specific path.
///
/// The application never writes its settings; this is used to seed config
/// files in unit and integration tests.
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
