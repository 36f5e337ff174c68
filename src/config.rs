//! Build-time Configuration
//!
//! Values are baked in when Trunk compiles the app:
//! `TODAYS_TASKS_STORAGE_KEY` and `TODAYS_TASKS_LOG`.

use std::str::FromStr;

use log::LevelFilter;

/// localStorage key holding the task array
pub const DEFAULT_STORAGE_KEY: &str = "todoItems";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TODAYS_TASKS_STORAGE_KEY"),
            option_env!("TODAYS_TASKS_LOG"),
        )
    }

    /// Blank or unparsable values fall back to the defaults
    pub fn from_values(storage_key: Option<&str>, log_level: Option<&str>) -> Self {
        let storage_key = storage_key
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_STORAGE_KEY)
            .to_string();
        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self { storage_key, log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.storage_key, "todoItems");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("tasks-v2"), Some("debug"));
        assert_eq!(config.storage_key, "tasks-v2");
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_values(Some("   "), Some("chatty"));
        assert_eq!(config, AppConfig::default());
    }
}
