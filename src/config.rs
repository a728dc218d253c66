//! Application Configuration
//!
//! Build-time settings. Override with `TODO_STORAGE_KEY` / `TODO_LOG_LEVEL`
//! in the environment of the wasm build.

use log::Level;

/// Storage key shared with the plain-JS version of the page
pub const DEFAULT_STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Key the todo list is stored under in `localStorage`
    pub storage_key: String,
    /// Minimum level forwarded to the browser console
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: Level::Info,
        }
    }
}

impl AppConfig {
    /// Config baked in at compile time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("TODO_STORAGE_KEY"), option_env!("TODO_LOG_LEVEL"))
    }

    fn from_values(storage_key: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            storage_key: storage_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.storage_key),
            log_level: log_level
                .and_then(parse_level)
                .unwrap_or(defaults.log_level),
        }
    }
}

fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" | "warning" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}
