/// Validate that the pipeline is properly configured
pub fn validate_pipeline() -> Result<(), String> {
    crate::log_debug!("Validating pipeline configuration");

    // Validate registry integration
    crate::registry::init_registry_logging()?;

    // Validate extractor integration
    crate::extractor::init_extractor_logging()?;

    // Validate emitter integration
    crate::emitter::init_emitter_logging()?;

    crate::log_success!(
        crate::logging::codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Pipeline validation succeeded",
        "stages_validated" => 3,
        "registry" => true,
        "extractor" => true,
        "emitter" => true
    );

    Ok(())
}
