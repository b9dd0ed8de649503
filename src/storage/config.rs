use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app::Settings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Unknown first day of week: {0}")]
    InvalidWeekday(String),
    #[error("Picker year range is empty: {min}..={max}")]
    InvalidYearRange { min: i32, max: i32 },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub picker: PickerConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub first_day_of_week: String,
    pub theme: String,
    pub clear_selection_on_month_change: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    pub year_min: i32,
    pub year_max: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Horizontal drag distance, in terminal columns, that counts as a swipe.
    pub swipe_threshold: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: "Sunday".to_string(),
            theme: "default".to_string(),
            clear_selection_on_month_change: false,
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            year_min: 2020,
            year_max: 2030,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { swipe_threshold: 2 }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path` if it exists; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gridcal")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn week_start(&self) -> Result<Weekday, ConfigError> {
        self.ui
            .first_day_of_week
            .parse::<Weekday>()
            .map_err(|_| ConfigError::InvalidWeekday(self.ui.first_day_of_week.clone()))
    }

    pub fn settings(&self) -> Result<Settings, ConfigError> {
        self.validate()?;
        Ok(Settings {
            week_start: self.week_start()?,
            year_range: self.picker.year_min..=self.picker.year_max,
            clear_selection_on_month_change: self.ui.clear_selection_on_month_change,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.week_start()?;
        if self.picker.year_min > self.picker.year_max {
            return Err(ConfigError::InvalidYearRange {
                min: self.picker.year_min,
                max: self.picker.year_max,
            });
        }
        Ok(())
    }
}
