//! Error types for registry loading and validation

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Structural defects detected while loading the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("definition '{name}' is missing required attribute '{attribute}'")]
    MissingAttribute {
        name: String,
        attribute: &'static str,
    },

    #[error("duplicate definition name '{name}'")]
    DuplicateName { name: String },

    #[error("duplicate api_code {api_code}: assigned to both '{first}' and '{duplicate}'")]
    DuplicateApiCode {
        api_code: u8,
        first: String,
        duplicate: String,
    },

    #[error("definition '{name}' has status_code {status_code} outside the HTTP range 100-599")]
    StatusCodeOutOfRange { name: String, status_code: u16 },

    #[error("definition '{name}' has an empty '{attribute}' attribute")]
    EmptyAttribute {
        name: String,
        attribute: &'static str,
    },

    #[error("definition '{name}' has a '{attribute}' attribute longer than {limit} characters")]
    AttributeTooLong {
        name: String,
        attribute: &'static str,
        limit: usize,
    },

    #[error("definition name '{name}' is not a valid variant identifier")]
    InvalidIdentifier { name: String },
}

impl RegistryError {
    /// Create a missing attribute error
    pub fn missing_attribute(name: &str, attribute: &'static str) -> Self {
        Self::MissingAttribute {
            name: name.to_string(),
            attribute,
        }
    }

    /// Create a duplicate name error
    pub fn duplicate_name(name: &str) -> Self {
        Self::DuplicateName {
            name: name.to_string(),
        }
    }

    /// Create a duplicate api_code error
    pub fn duplicate_api_code(api_code: u8, first: &str, duplicate: &str) -> Self {
        Self::DuplicateApiCode {
            api_code,
            first: first.to_string(),
            duplicate: duplicate.to_string(),
        }
    }

    /// Create a status code range error
    pub fn status_code_out_of_range(name: &str, status_code: u16) -> Self {
        Self::StatusCodeOutOfRange {
            name: name.to_string(),
            status_code,
        }
    }

    /// Create an empty attribute error
    pub fn empty_attribute(name: &str, attribute: &'static str) -> Self {
        Self::EmptyAttribute {
            name: name.to_string(),
            attribute,
        }
    }

    /// Create an attribute length error
    pub fn attribute_too_long(name: &str, attribute: &'static str, limit: usize) -> Self {
        Self::AttributeTooLong {
            name: name.to_string(),
            attribute,
            limit,
        }
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(name: &str) -> Self {
        Self::InvalidIdentifier {
            name: name.to_string(),
        }
    }

    /// Every registry defect is fatal to generation
    pub fn requires_halt(&self) -> bool {
        true
    }

    /// Get diagnostic code for the global logging system
    pub fn error_code(&self) -> crate::logging::codes::Code {
        use crate::logging::codes;
        match self {
            Self::MissingAttribute { .. } => codes::registry::MISSING_ATTRIBUTE,
            Self::DuplicateName { .. } => codes::registry::DUPLICATE_NAME,
            Self::DuplicateApiCode { .. } => codes::registry::DUPLICATE_API_CODE,
            Self::StatusCodeOutOfRange { .. } => codes::registry::STATUS_CODE_OUT_OF_RANGE,
            Self::EmptyAttribute { .. } => codes::registry::EMPTY_ATTRIBUTE_TEXT,
            Self::AttributeTooLong { .. } => codes::registry::ATTRIBUTE_TEXT_TOO_LONG,
            Self::InvalidIdentifier { .. } => codes::registry::INVALID_VARIANT_IDENTIFIER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = RegistryError::missing_attribute("BlockNotFound", "message");
        assert_eq!(
            error.to_string(),
            "definition 'BlockNotFound' is missing required attribute 'message'"
        );
    }

    #[test]
    fn test_error_codes() {
        let error = RegistryError::duplicate_api_code(70, "BlockNotFound", "BlockMissing");
        assert_eq!(error.error_code().as_str(), "E012");
        assert!(error.requires_halt());
    }
}
