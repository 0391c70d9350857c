//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::view::ViewMode;
use mealdeck_api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Recipe API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL the endpoint paths are joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// View shown at startup ("home", "category" or "details")
    #[serde(default = "default_start_view")]
    pub start_view: String,

    /// Width of the category drawer in columns
    #[serde(default = "default_drawer_width")]
    pub drawer_width: u16,

    /// Browser for source links (empty = system default)
    #[serde(default)]
    pub browser: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            start_view: default_start_view(),
            drawer_width: default_drawer_width(),
            browser: String::new(),
        }
    }
}

impl UiSettings {
    /// Configured start view; unknown names fall back to home
    pub fn start_view_mode(&self) -> ViewMode {
        ViewMode::parse_or_home(&self.start_view)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_start_view() -> String {
    ViewMode::Home.to_string()
}

fn default_drawer_width() -> u16 {
    28
}
