// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

/// Log level as exposed to user configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Convert to the event system's log level type
    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }

    fn from_env_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warning" | "warn" => Some(LogLevel::Warning),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether diagnostics are emitted as structured JSON events
    pub use_structured_logging: bool,

    /// Minimum log level for diagnostics
    pub min_log_level: LogLevel,

    /// Whether to log generation performance metrics
    pub log_performance_events: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var("AET_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var("AET_MIN_LOG_LEVEL")
                .ok()
                .and_then(|v| LogLevel::from_env_value(&v))
                .unwrap_or(LogLevel::Warning),
            log_performance_events: env::var("AET_LOG_PERFORMANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorPreferences {
    /// Whether to report generation metrics (count, bytes, duration) after a
    /// successful run
    pub report_generation_metrics: bool,

    /// Whether `--check` reports defects as JSON instead of plain text
    pub check_report_json: bool,
}

impl Default for GeneratorPreferences {
    fn default() -> Self {
        Self {
            report_generation_metrics: env::var("AET_REPORT_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            check_report_json: env::var("AET_CHECK_REPORT_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_env_value() {
        assert_eq!(LogLevel::from_env_value("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_env_value("WARN"), Some(LogLevel::Warning));
        assert_eq!(LogLevel::from_env_value("nonsense"), None);
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_events_log_level(),
            crate::logging::LogLevel::Error
        );
        assert_eq!(
            LogLevel::Debug.to_events_log_level(),
            crate::logging::LogLevel::Debug
        );
    }

    #[test]
    fn test_generator_preferences_default() {
        let prefs = GeneratorPreferences::default();
        // Defaults hold unless the AET_* environment variables are set
        if std::env::var("AET_CHECK_REPORT_JSON").is_err() {
            assert!(!prefs.check_report_json);
        }
    }
}
