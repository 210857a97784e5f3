//! Configuration module for logging - using compile-time constants
//!
//! Compile-time limits come from the generated constants; user experience
//! knobs come from runtime preferences (AET_* environment variables).

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

// Type aliases for clarity
type EventsLogLevel = crate::logging::events::LogLevel;

// ============================================================================
// RUNTIME PREFERENCES STORAGE
// ============================================================================

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime preferences (pins them for the process lifetime)
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized")?;

    Ok(())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

// ============================================================================
// CONFIGURATION ACCESS FUNCTIONS
// ============================================================================

/// Get minimum log level (respects user preference within the security floor)
pub fn get_min_log_level() -> EventsLogLevel {
    let preferences = get_runtime_preferences();
    let user_level = preferences.min_log_level.to_events_log_level();

    // Errors and warnings up to the security floor are always logged
    let floor = match SECURITY_MIN_LOG_LEVEL {
        0 => EventsLogLevel::Error,
        1 => EventsLogLevel::Warning,
        _ => EventsLogLevel::Info,
    };

    if user_level < floor {
        floor
    } else {
        user_level
    }
}

/// Check if structured logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if performance events should be logged (user preference)
pub fn log_performance_events() -> bool {
    get_runtime_preferences().log_performance_events
}

/// Get error buffer size (compile-time constant)
pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Get maximum log message length (compile-time constant)
pub fn get_max_log_message_length() -> usize {
    MAX_LOG_MESSAGE_LENGTH
}

// ============================================================================
// CONFIGURATION VALIDATION
// ============================================================================

/// Validate current configuration settings
pub fn validate_config() -> Result<(), String> {
    if LOG_BUFFER_SIZE > 100_000 {
        return Err(format!("Log buffer size too large: {}", LOG_BUFFER_SIZE));
    }

    if LOG_BUFFER_SIZE < 100 {
        return Err(format!("Log buffer size too small: {}", LOG_BUFFER_SIZE));
    }

    Ok(())
}

/// Get configuration summary for diagnostics
pub fn get_config_summary() -> String {
    let preferences = get_runtime_preferences();

    format!(
        "Logging Configuration:\n\
         === Compile-time Constants ===\n\
         - Log buffer size: {}\n\
         - Max message length: {}\n\
         - Security min level: {}\n\
         === User Preferences (Runtime) ===\n\
         - Min log level: {:?}\n\
         - Structured logging: {}\n\
         - Performance events: {}",
        LOG_BUFFER_SIZE,
        MAX_LOG_MESSAGE_LENGTH,
        SECURITY_MIN_LOG_LEVEL,
        preferences.min_log_level,
        preferences.use_structured_logging,
        preferences.log_performance_events,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        assert!(validate_config().is_ok());
    }

    #[test]
    fn test_security_floor() {
        // The floor keeps warnings visible regardless of user preference
        let level = get_min_log_level();
        assert!(level >= EventsLogLevel::Warning);
    }

    #[test]
    fn test_config_summary() {
        let summary = get_config_summary();
        assert!(summary.contains("Logging Configuration"));
        assert!(summary.contains("Log buffer size"));
    }
}
