//! Configuration support for the filter studio.
//!
//! Settings are stored as JSON in `localStorage` in the browser. Outside the
//! browser only the defaults and (de)serialization are available.

use serde::{Deserialize, Serialize};

use crate::constants::{notification::DEFAULT_DURATION_MS, APPLY_DEBOUNCE_MS};
use crate::keybindings::KeyBindings;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to the `log` crate's level.
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Version of the configuration format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,

    /// Keybinding configuration
    #[serde(default)]
    pub keybindings: KeyBindings,
}

fn default_app_name() -> String {
    "Filter Studio".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Base URL of the processing server; empty means same origin
    #[serde(default)]
    pub api_base: String,

    /// Quiet period before control changes are applied
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,

    /// How long notifications stay visible unless a flow says otherwise
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u32,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_debounce_ms() -> u32 {
    APPLY_DEBOUNCE_MS
}

fn default_notification_ms() -> u32 {
    DEFAULT_DURATION_MS
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            debounce_ms: default_debounce_ms(),
            notification_ms: default_notification_ms(),
            log_level: LogLevel::default(),
        }
    }
}

impl StudioConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: Preferences::default(),
            keybindings: KeyBindings::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Stored config from `localStorage`, if present and readable.
    ///
    /// Unparsable or too-new entries are logged and ignored.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let json = match local_storage().and_then(|storage| {
            storage
                .get_item(STORAGE_KEY)
                .map_err(|e| ConfigError::StorageError(format!("{e:?}")))
        }) {
            Ok(Some(json)) => json,
            Ok(None) => {
                log::debug!("No stored configuration");
                return None;
            }
            Err(e) => {
                log::warn!("⚠️ Could not read configuration: {}", e);
                return None;
            }
        };

        Self::from_json(&json)
            .inspect(|_| log::info!("⚙️ Loaded configuration from localStorage"))
            .inspect_err(|e| log::warn!("⚠️ Ignoring stored configuration: {}", e))
            .ok()
    }

    /// Write the config to `localStorage`.
    #[cfg(target_arch = "wasm32")]
    pub fn save_to_local_storage(&self) -> Result<(), ConfigError> {
        let json = self.to_json()?;
        local_storage()?
            .set_item(STORAGE_KEY, &json)
            .map_err(|e| ConfigError::StorageError(format!("{e:?}")))?;
        log::info!("💾 Saved configuration to localStorage");
        Ok(())
    }
}

/// `localStorage` key holding the JSON config.
#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "filter-studio-config";

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, ConfigError> {
    web_sys::window()
        .ok_or_else(|| ConfigError::StorageError("no window".to_string()))?
        .local_storage()
        .map_err(|e| ConfigError::StorageError(format!("{e:?}")))?
        .ok_or_else(|| ConfigError::StorageError("localStorage unavailable".to_string()))
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// Storage error (localStorage)
    #[error("Storage error: {0}")]
    StorageError(String),
}
