mod error;
mod info;
mod result;
mod validation;

// Re-export public types
pub use error::GenerationError;
pub use info::{get_pipeline_info, PipelineInfo};
pub use result::{CheckReport, GenerationResult};
pub use validation::validate_pipeline;

use crate::registry::RawErrorDefinition;
use crate::{log_info, log_success};
use std::time::Instant;

/// Run the complete generation pipeline (registry -> extractor -> emitter)
/// over the embedded catalog.
///
/// The artifact is fully rendered before the caller sees it, so a fatal
/// defect can never leave a half-written artifact behind.
pub fn run_generation() -> Result<GenerationResult, GenerationError> {
    run_generation_over(crate::registry::CATALOG)
}

/// Run the generation pipeline over an explicit definition set
pub(crate) fn run_generation_over(
    raw_definitions: &[RawErrorDefinition],
) -> Result<GenerationResult, GenerationError> {
    let start_time = Instant::now();

    log_info!("Starting taxonomy generation pipeline",
        "authored_definitions" => raw_definitions.len()
    );

    // Stage 1: Registry loading and validation
    let registry = crate::registry::load_from(raw_definitions)?;

    // Stage 2: Deterministic extraction
    let extraction = crate::extractor::extract(&registry)?;

    // Stage 3: Artifact rendering
    let source = crate::emitter::render(&extraction)?;

    let result = GenerationResult::new(source, extraction.len(), start_time.elapsed());
    result.log_success();

    Ok(result)
}

/// Run the lint pass over the embedded catalog, collecting every defect
pub fn run_check() -> CheckReport {
    log_info!("Starting catalog check",
        "authored_definitions" => crate::registry::CATALOG.len()
    );

    let defects = crate::registry::check_catalog();

    log_success!(
        crate::logging::codes::success::CHECK_COMPLETE,
        "Catalog check complete",
        "definitions" => crate::registry::CATALOG.len(),
        "defects" => defects.len()
    );

    CheckReport {
        catalog_size: crate::registry::CATALOG.len(),
        defects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{RawErrorDefinition, RegistryError};
    use assert_matches::assert_matches;

    #[test]
    fn test_validate_pipeline() {
        let _ = crate::logging::init_global_logging();
        let result = validate_pipeline();
        assert!(result.is_ok());
    }

    #[test]
    fn test_generation_over_embedded_catalog() {
        let result = run_generation().expect("embedded catalog must generate");

        assert_eq!(result.definition_count, crate::registry::CATALOG.len());
        assert!(result.source.contains("pub enum RestApiError {"));
        assert_eq!(result.bytes_emitted, result.source.len());
    }

    #[test]
    fn test_generation_is_byte_deterministic() {
        let a = run_generation().unwrap();
        let b = run_generation().unwrap();
        assert_eq!(a.source, b.source);
    }

    #[test]
    fn test_empty_registry_generates_vacuous_artifact() {
        let result = run_generation_over(&[]).unwrap();

        assert_eq!(result.definition_count, 0);
        assert!(result.source.contains("pub enum RestApiError {\n}\n"));
    }

    #[test]
    fn test_incomplete_definition_aborts_with_no_output() {
        let broken = [RawErrorDefinition {
            name: "BlockNotFound",
            api_code: Some(70),
            status_code: Some(404),
            title: Some("Block Not Found"),
            message: None,
        }];

        let result = run_generation_over(&broken);
        assert_matches!(
            result,
            Err(GenerationError::Registry(RegistryError::MissingAttribute {
                ref attribute,
                ..
            })) if *attribute == "message"
        );
    }

    #[test]
    fn test_check_on_embedded_catalog_is_clean() {
        let report = run_check();
        assert!(report.is_clean());
        assert_eq!(report.catalog_size, crate::registry::CATALOG.len());
    }

    #[test]
    fn test_pipeline_error_creation() {
        let error = GenerationError::pipeline_error("Test error");
        match error {
            GenerationError::Pipeline { message } => {
                assert_eq!(message, "Test error");
            }
            _ => panic!("Wrong error type"),
        }
    }
}
