//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::predictor::DEFAULT_ADDRESS;

/// Environment variable that overrides the configured API URL
pub const API_URL_ENV: &str = "PREDICTOR_API_URL";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Colour palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// User configuration for the TUI.
///
/// Every key is optional on disk; the accessors supply defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TuiConfig {
    /// Colour palette
    pub theme: Option<Theme>,
    /// Animated splash intro
    pub background_animation: Option<bool>,
    /// Prediction service base URL
    pub api_url: Option<String>,
    /// Per-request timeout
    pub request_timeout_secs: Option<u64>,
    /// Where exported results are written
    pub export_dir: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "predictor", "applicant-predictor")
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file location, if the platform has a data dir
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("applicant-predictor.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        self.theme.unwrap_or_default()
    }

    pub fn background_animation(&self) -> bool {
        self.background_animation.unwrap_or(true)
    }

    /// Effective API URL: environment, then file, then default
    pub fn api_url(&self) -> String {
        resolve_api_url(std::env::var(API_URL_ENV).ok(), self.api_url.as_deref())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn toggle_theme(&mut self) {
        self.theme = Some(self.theme().toggle());
    }

    pub fn toggle_background_animation(&mut self) {
        self.background_animation = Some(!self.background_animation());
    }
}

fn resolve_api_url(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|url| !url.trim().is_empty())
        .or_else(|| {
            configured
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
}
