//! Error Registry
//!
//! Holds the authoritative list of error definitions as static data and
//! validates it on load. Loading fails fast on the first structural defect;
//! `check_catalog` collects every defect for the lint pass.

mod catalog;
mod definition;
mod error;

pub use catalog::CATALOG;
pub use definition::{ErrorDefinition, RawErrorDefinition, REQUIRED_ATTRIBUTES};
pub use error::{RegistryError, RegistryResult};

use crate::config::constants::compile_time::registry::{
    MAX_IDENTIFIER_LENGTH, MAX_MESSAGE_LENGTH, MAX_TITLE_LENGTH,
};
use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::collections::{HashMap, HashSet};

/// HTTP status code bounds (protocol facts, not tunables)
const MIN_STATUS_CODE: u16 = 100;
const MAX_STATUS_CODE: u16 = 599;

/// Rust strict keywords that can never serve as a variant identifier
const RESERVED_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "dyn", "else", "enum", "extern", "false", "fn",
    "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
    "use", "where", "while",
];

/// The validated registry, read once in full by the extractor
#[derive(Debug, Clone)]
pub struct Registry {
    definitions: Vec<ErrorDefinition>,
}

impl Registry {
    pub fn definitions(&self) -> &[ErrorDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Load and validate the embedded catalog
pub fn load() -> RegistryResult<Registry> {
    load_from(catalog::CATALOG)
}

/// Load and validate an explicit definition set
pub fn load_from(raw_definitions: &[RawErrorDefinition]) -> RegistryResult<Registry> {
    log_debug!("Loading error registry",
        "authored_definitions" => raw_definitions.len()
    );

    let mut definitions = Vec::with_capacity(raw_definitions.len());
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_api_codes: HashMap<u8, &str> = HashMap::new();

    for raw in raw_definitions {
        let definition = validate_definition(raw).map_err(|e| {
            log_error!(e.error_code(), &e.to_string(), "definition" => raw.name);
            e
        })?;

        if !seen_names.insert(raw.name) {
            let e = RegistryError::duplicate_name(raw.name);
            log_error!(e.error_code(), &e.to_string());
            return Err(e);
        }

        if let Some(first) = seen_api_codes.insert(definition.api_code, raw.name) {
            let e = RegistryError::duplicate_api_code(definition.api_code, first, raw.name);
            log_error!(e.error_code(), &e.to_string());
            return Err(e);
        }

        definitions.push(definition);
    }

    log_success!(
        codes::success::REGISTRY_VALIDATION_PASSED,
        "Error registry loaded",
        "definitions" => definitions.len()
    );

    Ok(Registry { definitions })
}

/// Collect every defect in the embedded catalog (lint pass)
pub fn check_catalog() -> Vec<RegistryError> {
    check_definitions(catalog::CATALOG)
}

/// Collect every defect in an explicit definition set
pub fn check_definitions(raw_definitions: &[RawErrorDefinition]) -> Vec<RegistryError> {
    let mut defects = Vec::new();
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_api_codes: HashMap<u8, &str> = HashMap::new();

    for raw in raw_definitions {
        for attribute in raw.missing_attributes() {
            defects.push(RegistryError::missing_attribute(raw.name, attribute));
        }

        if raw.is_complete() {
            if let Err(e) = validate_definition(raw) {
                defects.push(e);
            }
        }

        if !seen_names.insert(raw.name) {
            defects.push(RegistryError::duplicate_name(raw.name));
        }

        if let Some(api_code) = raw.api_code {
            if let Some(first) = seen_api_codes.insert(api_code, raw.name) {
                defects.push(RegistryError::duplicate_api_code(api_code, first, raw.name));
            }
        }
    }

    defects
}

/// Validate a single authored record and produce its checked form
fn validate_definition(raw: &RawErrorDefinition) -> RegistryResult<ErrorDefinition> {
    let (Some(api_code), Some(status_code), Some(title), Some(message)) =
        (raw.api_code, raw.status_code, raw.title, raw.message)
    else {
        let attribute = raw.missing_attribute().unwrap_or("api_code");
        return Err(RegistryError::missing_attribute(raw.name, attribute));
    };

    if !is_valid_identifier(raw.name) {
        return Err(RegistryError::invalid_identifier(raw.name));
    }

    if raw.name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(RegistryError::attribute_too_long(
            raw.name,
            "name",
            MAX_IDENTIFIER_LENGTH,
        ));
    }

    if !(MIN_STATUS_CODE..=MAX_STATUS_CODE).contains(&status_code) {
        return Err(RegistryError::status_code_out_of_range(
            raw.name,
            status_code,
        ));
    }

    if title.is_empty() {
        return Err(RegistryError::empty_attribute(raw.name, "title"));
    }

    if message.is_empty() {
        return Err(RegistryError::empty_attribute(raw.name, "message"));
    }

    if title.len() > MAX_TITLE_LENGTH {
        return Err(RegistryError::attribute_too_long(
            raw.name,
            "title",
            MAX_TITLE_LENGTH,
        ));
    }

    if message.len() > MAX_MESSAGE_LENGTH {
        return Err(RegistryError::attribute_too_long(
            raw.name,
            "message",
            MAX_MESSAGE_LENGTH,
        ));
    }

    Ok(ErrorDefinition {
        name: raw.name.to_string(),
        api_code,
        status_code,
        title: title.to_string(),
        message: message.to_string(),
    })
}

/// Check that a name is usable as a variant tag in the emitted enumeration
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();

    let valid_shape = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    valid_shape && !RESERVED_KEYWORDS.contains(&name)
}

/// Validate registry logging integration
pub fn init_registry_logging() -> Result<(), String> {
    let required = [
        codes::registry::MISSING_ATTRIBUTE,
        codes::registry::DUPLICATE_NAME,
        codes::registry::DUPLICATE_API_CODE,
        codes::registry::STATUS_CODE_OUT_OF_RANGE,
        codes::registry::EMPTY_ATTRIBUTE_TEXT,
        codes::registry::INVALID_VARIANT_IDENTIFIER,
        codes::registry::ATTRIBUTE_TEXT_TOO_LONG,
    ];

    for code in required {
        if codes::get_description(code.as_str()) == "Unknown error" {
            return Err(format!(
                "Registry logging code {} has no metadata",
                code.as_str()
            ));
        }
    }

    Ok(())
}
