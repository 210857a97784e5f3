//! Extractor
//!
//! Enumerates the registry's concrete definitions in a deterministic total
//! order: lexicographically ascending by name. The ordering is an explicit
//! sort step over the registration list, never an incidental iteration
//! order, so identical input always yields byte-identical emitted output.

mod error;

pub use error::ExtractionError;

use crate::config::compile_time::registry::MAX_DEFINITIONS;
use crate::logging::codes;
use crate::registry::{ErrorDefinition, Registry};
use crate::{log_debug, log_error, log_success};

/// The extracted, name-ordered definition sequence
#[derive(Debug, Clone)]
pub struct Extraction {
    definitions: Vec<ErrorDefinition>,
}

impl Extraction {
    /// Definitions in lexicographic name order
    pub fn definitions(&self) -> &[ErrorDefinition] {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Variant names in emission order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.name.as_str())
    }
}

/// Extract the registry's definitions in deterministic order
pub fn extract(registry: &Registry) -> Result<Extraction, ExtractionError> {
    log_debug!("Extracting taxonomy", "definitions" => registry.len());

    ensure_capacity(registry.len()).map_err(|e| {
        log_error!(e.error_code(), &e.to_string());
        e
    })?;

    let mut definitions = registry.definitions().to_vec();
    definitions.sort_by(|a, b| a.name.cmp(&b.name));

    log_success!(
        codes::success::EXTRACTION_COMPLETE,
        "Taxonomy extraction complete",
        "definitions" => definitions.len()
    );

    Ok(Extraction { definitions })
}

/// Guard the configured registry cardinality limit
fn ensure_capacity(count: usize) -> Result<(), ExtractionError> {
    if count > MAX_DEFINITIONS {
        return Err(ExtractionError::capacity_exceeded(count, MAX_DEFINITIONS));
    }
    Ok(())
}

/// Validate extractor logging integration
pub fn init_extractor_logging() -> Result<(), String> {
    let code = codes::extractor::CAPACITY_EXCEEDED;
    if codes::get_description(code.as_str()) == "Unknown error" {
        return Err(format!(
            "Extractor logging code {} has no metadata",
            code.as_str()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{self, RawErrorDefinition};
    use assert_matches::assert_matches;

    fn raw(name: &'static str, api_code: u8) -> RawErrorDefinition {
        RawErrorDefinition {
            name,
            api_code: Some(api_code),
            status_code: Some(404),
            title: Some("Not Found"),
            message: Some("The requested resource does not exist."),
        }
    }

    #[test]
    fn test_extraction_orders_by_name() {
        let registry =
            registry::load_from(&[raw("BlockNotFound", 70), raw("BatchNotFound", 71)]).unwrap();

        let extraction = extract(&registry).unwrap();
        let names: Vec<&str> = extraction.names().collect();
        assert_eq!(names, vec!["BatchNotFound", "BlockNotFound"]);
    }

    #[test]
    fn test_extraction_is_declaration_order_independent() {
        let forward =
            registry::load_from(&[raw("BatchNotFound", 71), raw("BlockNotFound", 70)]).unwrap();
        let reversed =
            registry::load_from(&[raw("BlockNotFound", 70), raw("BatchNotFound", 71)]).unwrap();

        let a = extract(&forward).unwrap();
        let b = extract(&reversed).unwrap();
        assert_eq!(a.definitions(), b.definitions());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let registry = registry::load().unwrap();

        let a = extract(&registry).unwrap();
        let b = extract(&registry).unwrap();
        assert_eq!(a.definitions(), b.definitions());
    }

    #[test]
    fn test_empty_registry_extracts_empty_sequence() {
        let registry = registry::load_from(&[]).unwrap();
        let extraction = extract(&registry).unwrap();
        assert!(extraction.is_empty());
        assert_eq!(extraction.len(), 0);
    }

    #[test]
    fn test_full_catalog_is_sorted() {
        let registry = registry::load().unwrap();
        let extraction = extract(&registry).unwrap();

        let names: Vec<&str> = extraction.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(extraction.len(), registry.len());
    }

    #[test]
    fn test_capacity_guard() {
        assert!(ensure_capacity(0).is_ok());
        assert!(ensure_capacity(MAX_DEFINITIONS).is_ok());
        assert_matches!(
            ensure_capacity(MAX_DEFINITIONS + 1),
            Err(ExtractionError::CapacityExceeded { .. })
        );
    }

    #[test]
    fn test_init_extractor_logging() {
        assert!(init_extractor_logging().is_ok());
    }
}
