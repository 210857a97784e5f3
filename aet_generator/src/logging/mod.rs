//! Global logging module for the AET generator
//!
//! Provides a thread-safe global logging service with structured (JSON) and
//! plain console output. All diagnostics go to stderr; stdout is reserved for
//! the generated artifact.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    // Validate diagnostic code system
    let test_codes = ["ERR001", "E010", "E030", "E050"];
    for &code in &test_codes {
        if codes::get_description(code) == "Unknown error" {
            return Err(format!("Missing metadata for diagnostic code: {}", code));
        }
    }

    let event = events::LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );
    logging_service.log_event(event);

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized")?;

    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::error(code, message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::success(code, message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::info(message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Safe error logging (won't panic if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        let event = LogEvent::error(code, message);
        logger.log_event(event);
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

/// Safe critical error logging
pub fn safe_log_critical(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        let event = LogEvent::error(code, message);
        logger.log_event(event);
    }
    // Always log critical errors to stderr regardless
    eprintln!("CRITICAL ERROR [{}]: {}", code.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_logging_initialization() {
        // Can't test if already initialized
        if is_initialized() {
            return;
        }

        let result = init_global_logging();
        assert!(result.is_ok());
        assert!(is_initialized());
    }

    #[test]
    fn test_safe_logging() {
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
        safe_log_critical(codes::system::INTERNAL_ERROR, "Test critical error");
        // Should not panic even if global logging is not initialized
    }

    #[test]
    fn test_macro_support_functions() {
        // These route through the global logger if present and drop events
        // otherwise; either way they must not panic.
        log_error_with_context(
            codes::registry::MISSING_ATTRIBUTE,
            "missing attribute",
            vec![("definition", "BlockNotFound"), ("attribute", "message")],
        );
        log_success_with_context(codes::success::GENERATION_COMPLETE, "done", vec![]);
        log_info_with_context("info", vec![("k", "v")]);
    }
}
