//! Application settings - persisted user preferences.
//!
//! Settings are loaded from disk at startup. A missing file means defaults;
//! an unreadable or invalid file also falls back to defaults, with a warning.

use std::path::{Path, PathBuf};

use cform_validate::ValidationRules;
use serde::{Deserialize, Serialize};

use crate::error::GuiError;
use crate::logging::{LogConfig, LogFormat, LogLevel};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings.
///
/// Serialized to TOML and stored in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// General application settings.
    pub general: GeneralSettings,

    /// Validation thresholds.
    pub validation: ValidationRules,

    /// Logging settings.
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from the default path.
    ///
    /// # Errors
    ///
    /// See [`Settings::try_load_from`].
    pub fn try_load() -> Result<Self, GuiError> {
        Self::try_load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    ///
    /// A file that does not exist yields defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GuiError::SettingsLoad`] if the file cannot be read or parsed,
    /// and [`GuiError::InvalidRules`] if the validation thresholds are unusable.
    pub fn try_load_from(path: &Path) -> Result<Self, GuiError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| GuiError::SettingsLoad {
            reason: format!("{}: {}", path.display(), e),
        })?;
        let settings: Self = toml::from_str(&content).map_err(|e| GuiError::SettingsLoad {
            reason: format!("{}: {}", path.display(), e),
        })?;
        settings.validation.check()?;
        Ok(settings)
    }

    /// Save settings to the default path.
    ///
    /// # Errors
    ///
    /// See [`Settings::save_to`].
    pub fn save(&self) -> Result<(), GuiError> {
        self.save_to(&Self::config_path())
    }

    /// Save settings to a specific path.
    ///
    /// # Errors
    ///
    /// Returns [`GuiError::SettingsSave`] if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), GuiError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuiError::SettingsSave {
                reason: format!("Failed to create config directory: {}", e),
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to serialize settings: {}", e),
        })?;

        std::fs::write(path, content).map_err(|e| GuiError::SettingsSave {
            reason: format!("Failed to write settings: {}", e),
        })
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "ContactFormStudio", "CFS")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Logging configuration derived from these settings.
    pub fn log_config(&self) -> LogConfig {
        LogConfig::default()
            .with_level(self.logging.level.to_level())
            .with_format(self.logging.format)
            .with_timestamps(self.logging.timestamps)
            .with_ansi(self.logging.ansi)
            .with_log_file(self.logging.log_file.clone())
            .with_log_data(self.logging.log_data)
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Use the dark theme.
    pub dark_mode: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level written.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Prefix each line with a timestamp.
    pub timestamps: bool,
    /// Colorize output. Ignored for log files.
    pub ansi: bool,
    /// Log file; stderr when unset.
    pub log_file: Option<PathBuf>,
    /// Allow form values in logs.
    pub log_data: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            timestamps: false,
            ansi: true,
            log_file: None,
            log_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("[general]\ndark_mode = true\n").unwrap();
        assert!(settings.general.dark_mode);
        assert_eq!(settings.validation, ValidationRules::default());
        assert_eq!(settings.logging.level, LogLevel::Info);
    }

    #[test]
    fn test_log_config_follows_settings() {
        let mut settings = Settings::default();
        settings.logging.level = LogLevel::Debug;
        settings.logging.format = LogFormat::Compact;
        settings.logging.log_data = true;

        let config = settings.log_config();
        assert_eq!(config.level, tracing::Level::DEBUG);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.log_data);
    }

    #[test]
    fn test_timestamps_and_ansi_reach_log_config() {
        let settings: Settings =
            toml::from_str("[logging]\ntimestamps = true\nansi = false\n").unwrap();
        let config = settings.log_config();
        assert!(config.with_timestamps);
        assert!(!config.with_ansi);

        let config = Settings::default().log_config();
        assert!(!config.with_timestamps);
        assert!(config.with_ansi);
    }
}
