// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    registry: RegistryLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct RegistryLimits {
    max_definitions: usize,
    max_identifier_length: usize,
    max_title_length: usize,
    max_message_length: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
    security_min_log_level: u8,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=AET_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=AET_CONFIG_DIR");

    let profile = env::var("AET_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("AET_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of aet_generator directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    // Build config path relative to workspace root
    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_security_constraints(&config, &profile);
    generate_constants(&config, &profile);

    println!(
        "cargo:warning=Generated constants from {}",
        config_path.display()
    );
}

fn validate_security_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_DEFINITIONS: usize = 10_000;
    const ABSOLUTE_MAX_TEXT_LENGTH: usize = 1_000_000;

    if config.registry.max_definitions == 0 {
        panic!("SECURITY: max_definitions must be at least 1");
    }

    if config.registry.max_definitions > ABSOLUTE_MAX_DEFINITIONS {
        panic!("SECURITY: max_definitions exceeds absolute maximum");
    }

    if config.registry.max_title_length > ABSOLUTE_MAX_TEXT_LENGTH
        || config.registry.max_message_length > ABSOLUTE_MAX_TEXT_LENGTH
    {
        panic!("SECURITY: attribute text limits exceed absolute maximum");
    }

    if config.logging.security_min_log_level > 2 {
        panic!("SECURITY: security_min_log_level too high (max: 2)");
    }

    if config.logging.log_buffer_size < 100 || config.logging.log_buffer_size > 100_000 {
        panic!("SECURITY: log_buffer_size outside allowed range (100..=100000)");
    }

    if profile == "production" && config.logging.log_buffer_size > 10_000 {
        panic!("PRODUCTION: log_buffer_size too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod registry {{
        pub const MAX_DEFINITIONS: usize = {};
        pub const MAX_IDENTIFIER_LENGTH: usize = {};
        pub const MAX_TITLE_LENGTH: usize = {};
        pub const MAX_MESSAGE_LENGTH: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
        pub const SECURITY_MIN_LOG_LEVEL: u8 = {};
    }}
}}
"#,
        profile,
        // Registry
        config.registry.max_definitions,
        config.registry.max_identifier_length,
        config.registry.max_title_length,
        config.registry.max_message_length,
        // Logging
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
        config.logging.security_min_log_level,
    );

    fs::write(output_path, constants_code).unwrap();
}
