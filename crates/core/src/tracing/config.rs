//! Configuration for logging

use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentationConfig {
    /// Service name attached to the startup log line
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log level filter used when `RUST_LOG` is unset (e.g. "info", "lmm=debug")
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for InstrumentationConfig {
    fn default() -> Self {
        Self {
            service_name: "lmm".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: "info".to_string(),
            json: false,
        }
    }
}

impl InstrumentationConfig {
    /// Configuration for a named service at its own version
    pub fn for_service(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            service_name: name.into(),
            service_version: version.into(),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables
    ///
    /// - `RUST_LOG`: log level filter
    /// - `LOG_FORMAT=json`: JSON output
    #[must_use]
    pub fn with_env(mut self) -> Self {
        if let Ok(level) = std::env::var("RUST_LOG") {
            self.log_level = level;
        }
        self.json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
        self
    }
}
