//! Consolidated error codes and classification system
//!
//! Single source of truth for all generator diagnostic codes, their metadata,
//! and classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a diagnostic code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Registry validation error codes
pub mod registry {
    use super::Code;

    pub const MISSING_ATTRIBUTE: Code = Code::new("E010");
    pub const DUPLICATE_NAME: Code = Code::new("E011");
    pub const DUPLICATE_API_CODE: Code = Code::new("E012");
    pub const STATUS_CODE_OUT_OF_RANGE: Code = Code::new("E013");
    pub const EMPTY_ATTRIBUTE_TEXT: Code = Code::new("E014");
    pub const INVALID_VARIANT_IDENTIFIER: Code = Code::new("E015");
    pub const ATTRIBUTE_TEXT_TOO_LONG: Code = Code::new("E016");
}

/// Extraction error codes
pub mod extractor {
    use super::Code;

    pub const CAPACITY_EXCEEDED: Code = Code::new("E030");
}

/// Emission and artifact output error codes
pub mod emitter {
    use super::Code;

    pub const RENDER_FAILURE: Code = Code::new("E050");
    pub const ARTIFACT_WRITE_FAILURE: Code = Code::new("E051");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const REGISTRY_VALIDATION_PASSED: Code = Code::new("I010");
    pub const EXTRACTION_COMPLETE: Code = Code::new("I020");
    pub const EMISSION_COMPLETE: Code = Code::new("I030");
    pub const GENERATION_COMPLETE: Code = Code::new("I040");
    pub const CHECK_COMPLETE: Code = Code::new("I050");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal generator error",
                "File a bug report against the generator",
            ),
        );
        registry.insert(
            "ERR002",
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "Generator initialization failure",
                "Check generator configuration and environment",
            ),
        );

        // Registry validation errors
        registry.insert(
            "E010",
            ErrorMetadata::new(
                "E010",
                "Registry",
                Severity::Critical,
                false,
                true,
                "Error definition is missing a required attribute",
                "Add the missing attribute to the definition in the catalog",
            ),
        );
        registry.insert(
            "E011",
            ErrorMetadata::new(
                "E011",
                "Registry",
                Severity::Critical,
                false,
                true,
                "Two error definitions share the same name",
                "Rename one of the definitions; names are variant tags",
            ),
        );
        registry.insert(
            "E012",
            ErrorMetadata::new(
                "E012",
                "Registry",
                Severity::Critical,
                false,
                true,
                "Two error definitions share the same api_code",
                "Assign a fresh api_code; established codes never change",
            ),
        );
        registry.insert(
            "E013",
            ErrorMetadata::new(
                "E013",
                "Registry",
                Severity::Critical,
                false,
                true,
                "status_code outside the HTTP range 100-599",
                "Use a standard HTTP status code",
            ),
        );
        registry.insert(
            "E014",
            ErrorMetadata::new(
                "E014",
                "Registry",
                Severity::Critical,
                false,
                true,
                "title or message attribute is empty",
                "Provide non-empty human-readable text",
            ),
        );
        registry.insert(
            "E015",
            ErrorMetadata::new(
                "E015",
                "Registry",
                Severity::Critical,
                false,
                true,
                "Definition name is not a valid Rust identifier",
                "Rename the definition to a valid, non-keyword identifier",
            ),
        );
        registry.insert(
            "E016",
            ErrorMetadata::new(
                "E016",
                "Registry",
                Severity::Critical,
                false,
                true,
                "Attribute text exceeds the configured length limit",
                "Shorten the text or raise the limit in the build config",
            ),
        );

        // Extraction errors
        registry.insert(
            "E030",
            ErrorMetadata::new(
                "E030",
                "Extractor",
                Severity::Critical,
                false,
                true,
                "Registry holds more definitions than the configured maximum",
                "Raise max_definitions in the build config",
            ),
        );

        // Emission errors
        registry.insert(
            "E050",
            ErrorMetadata::new(
                "E050",
                "Emitter",
                Severity::Critical,
                false,
                true,
                "Rendering the generated source failed",
                "File a bug report against the generator",
            ),
        );
        registry.insert(
            "E051",
            ErrorMetadata::new(
                "E051",
                "Emitter",
                Severity::Critical,
                false,
                true,
                "Writing the generated artifact failed",
                "Check the output path, disk space, and permissions",
            ),
        );

        // Success codes surfaced in diagnostics
        registry.insert(
            "I001",
            ErrorMetadata::new(
                "I001",
                "System",
                Severity::Low,
                true,
                false,
                "Generator initialization completed successfully",
                "Continue normal operation",
            ),
        );
        registry.insert(
            "I010",
            ErrorMetadata::new(
                "I010",
                "Registry",
                Severity::Low,
                true,
                false,
                "Registry validation passed",
                "Continue to extraction",
            ),
        );
        registry.insert(
            "I040",
            ErrorMetadata::new(
                "I040",
                "Pipeline",
                Severity::Low,
                true,
                false,
                "Taxonomy generation completed successfully",
                "Consume the emitted artifact",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get severity from a code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for a code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from a code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_codes_have_metadata() {
        for code in [
            registry::MISSING_ATTRIBUTE,
            registry::DUPLICATE_NAME,
            registry::DUPLICATE_API_CODE,
            registry::STATUS_CODE_OUT_OF_RANGE,
            registry::EMPTY_ATTRIBUTE_TEXT,
            registry::INVALID_VARIANT_IDENTIFIER,
            registry::ATTRIBUTE_TEXT_TOO_LONG,
        ] {
            assert_ne!(get_description(code.as_str()), "Unknown error");
            assert_eq!(get_category(code.as_str()), "Registry");
        }
    }

    #[test]
    fn test_structural_defects_require_halt() {
        assert!(requires_halt(registry::MISSING_ATTRIBUTE.as_str()));
        assert!(requires_halt(extractor::CAPACITY_EXCEEDED.as_str()));
        assert!(!is_recoverable(registry::DUPLICATE_API_CODE.as_str()));
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("Z999"), "Unknown error");
        assert_eq!(get_severity("Z999"), Severity::Medium);
        assert!(!requires_halt("Z999"));
    }

    #[test]
    fn test_code_display() {
        assert_eq!(system::INTERNAL_ERROR.to_string(), "ERR001");
        assert_eq!(success::GENERATION_COMPLETE.as_str(), "I040");
    }
}
