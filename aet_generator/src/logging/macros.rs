//! Type-safe logging macros using Code types with Display support

// ============================================================================
// ERROR LOGGING MACROS
// ============================================================================

/// Log error with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::log_error_with_context($code, $message, vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        {
            // Convert Display types to strings, then create string storage and references
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_error_with_context($code, $message, context_refs)
        }
    };
}

// ============================================================================
// SUCCESS LOGGING MACROS
// ============================================================================

/// Log success with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::log_success_with_context($code, $message, vec![])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+) => {
        {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_success_with_context($code, $message, context_refs)
        }
    };
}

// ============================================================================
// INFO LOGGING MACROS
// ============================================================================

/// Log informational message - accepts Display types for context values
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::log_info_with_context($message, vec![])
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            let context_strings: Vec<(&str, String)> = vec![$(($key, format!("{}", $value))),+];
            let context_refs: Vec<(&str, &str)> = context_strings.iter()
                .map(|(k, v)| (*k, v.as_str()))
                .collect();
            $crate::logging::log_info_with_context($message, context_refs)
        }
    };
}

// ============================================================================
// WARNING LOGGING MACROS
// ============================================================================

/// Log warning message - accepts Display types for context values
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        {
            let event = $crate::logging::LogEvent::warning($message);
            if let Some(logger) = $crate::logging::try_get_global_logger() {
                logger.log_event(event);
            }
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            let mut event = $crate::logging::LogEvent::warning($message);
            $(
                // Convert Display types to strings automatically
                event = event.with_context($key, &format!("{}", $value));
            )+
            if let Some(logger) = $crate::logging::try_get_global_logger() {
                logger.log_event(event);
            }
        }
    };
}

// ============================================================================
// DEBUG LOGGING MACROS
// ============================================================================

/// Log debug message - accepts Display types for context values
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        {
            if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
                let event = $crate::logging::LogEvent::debug($message);
                if let Some(logger) = $crate::logging::try_get_global_logger() {
                    logger.log_event(event);
                }
            }
        }
    };

    ($message:expr, $($key:expr => $value:expr),+) => {
        {
            if $crate::logging::config::get_min_log_level() >= $crate::logging::LogLevel::Debug {
                let mut event = $crate::logging::LogEvent::debug($message);
                $(
                    event = event.with_context($key, &format!("{}", $value));
                )+
                if let Some(logger) = $crate::logging::try_get_global_logger() {
                    logger.log_event(event);
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::codes;

    #[allow(dead_code)]
    fn example_usage() {
        let definition_count: usize = 30;
        let duration: std::time::Duration = std::time::Duration::from_millis(5);

        // Error with numeric and string Display values
        log_error!(codes::registry::DUPLICATE_API_CODE, "Duplicate api_code",
            "api_code" => 70,
            "first" => "BlockNotFound"
        );

        // Success with mixed Display types
        log_success!(codes::success::GENERATION_COMPLETE, "Generation complete",
            "definitions" => definition_count,
            "duration_ms" => duration.as_secs_f64() * 1000.0
        );

        // Info with boolean and numeric values
        log_info!("Extracting definitions",
            "registry_empty" => definition_count == 0,
            "count" => definition_count
        );

        log_warning!("Registry is empty",
            "count" => definition_count
        );

        log_debug!("Pipeline stage boundary");
    }
}
