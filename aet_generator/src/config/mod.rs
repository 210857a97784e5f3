//! Configuration module for the AET generator
//! Automatically uses generated constants from TOML configuration

// Include generated constants from build.rs
// This file is generated at compile time from your TOML configuration
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

// Keep original constants file for reference and runtime configuration
pub mod constants;
pub mod runtime;

/// Build information and configuration metadata
pub mod build_info {
    /// Returns the configuration profile used during build
    pub fn profile() -> &'static str {
        option_env!("AET_BUILD_PROFILE").unwrap_or("development")
    }

    /// Returns the configuration directory used during build
    pub fn config_dir() -> &'static str {
        option_env!("AET_CONFIG_DIR").unwrap_or("config")
    }

    /// Returns configuration source information
    pub fn source_info() -> String {
        format!("Generated from {}/{}.toml", config_dir(), profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_constants_present() {
        assert!(compile_time::registry::MAX_DEFINITIONS > 0);
        assert!(compile_time::logging::LOG_BUFFER_SIZE >= 100);
        assert!(compile_time::logging::SECURITY_MIN_LOG_LEVEL <= 2);
    }

    #[test]
    fn test_reference_constants_match_generated() {
        // The reference tree in constants.rs mirrors the development profile.
        if build_info::profile() != "development" {
            return;
        }
        assert_eq!(
            constants::compile_time::registry::MAX_DEFINITIONS,
            compile_time::registry::MAX_DEFINITIONS
        );
        assert_eq!(
            constants::compile_time::logging::LOG_BUFFER_SIZE,
            compile_time::logging::LOG_BUFFER_SIZE
        );
    }

    #[test]
    fn test_build_info() {
        assert!(!build_info::profile().is_empty());
        assert!(build_info::source_info().contains(build_info::profile()));
    }
}
