//! Application Configuration
//!
//! Fixed settings for the page. There is no environment to read from, so
//! the defaults are the configuration; `Deserialize` lets a host page
//! override them with an inline JSON blob.

use serde::Deserialize;

/// Page-wide settings, provided once at mount
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local storage key holding the task array
    pub storage_key: String,
    /// Milliseconds to wait for a row's exit animation before removing it anyway
    pub exit_fallback_ms: u32,
    /// `log` level name
    pub log_level: String,
    /// Lines kept by the console logger's ring buffer
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "todos".to_string(),
            exit_fallback_ms: 600,
            log_level: "info".to_string(),
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    /// Parse an override blob, keeping defaults for missing fields
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Resolve the optional page override. A malformed blob falls back to
    /// the defaults and hands back the parse error, since this runs before
    /// the logger that would report it is installed.
    pub fn resolve(raw: Option<&str>) -> (Self, Option<serde_json::Error>) {
        match raw.map(Self::from_json) {
            None => (Self::default(), None),
            Some(Ok(config)) => (config, None),
            Some(Err(e)) => (Self::default(), Some(e)),
        }
    }
}
