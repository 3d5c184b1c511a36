use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Default configuration
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_LATENCY_MS: u64 = 300;
pub const DEFAULT_DISPLAY_NAME: &str = "you";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory available")]
    NoConfigDir,
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// "dark" or "light"
    pub theme: String,
    pub display_name: String,
    /// Messages per feed page
    pub page_size: usize,
    /// Simulated backend round-trip
    pub latency_ms: u64,
    /// Name of the channel open when the app last closed
    pub last_channel: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            latency_ms: DEFAULT_LATENCY_MS,
            last_channel: None,
        }
    }
}

impl Settings {
    /// Page size with a floor of one message.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

pub fn settings_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from("com", "teamchat", "teamchat-client")
        .ok_or(ConfigError::NoConfigDir)?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("settings.json"))
}

pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}

/// Load settings from the platform config dir, falling back to defaults
/// when the file is missing or unreadable.
pub fn load_settings() -> Settings {
    let loaded = settings_path().and_then(|path| load_settings_from(&path));
    match loaded {
        Ok(settings) => settings,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            tracing::warn!("using default settings: {}", e);
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    save_settings_to(&settings_path()?, settings)
}
