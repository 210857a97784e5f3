use crate::config::compile_time::registry::MAX_DEFINITIONS;
use crate::emitter::ENUM_NAME;

/// Information about pipeline capabilities
#[derive(Debug, Clone)]
pub struct PipelineInfo {
    pub pipeline_stages: usize,
    pub supports_registry_validation: bool,
    pub supports_check_mode: bool,
    pub supports_file_output: bool,
    pub emitted_enum: &'static str,
    pub mapping_functions: Vec<&'static str>,
    pub max_definitions: usize,
    pub global_logging_enabled: bool,
    pub structured_logging_available: bool,
}

impl PipelineInfo {
    pub fn report(&self) -> String {
        format!(
            "Taxonomy Generation Pipeline:\n\
             - Pipeline Stages: {}\n\
             - Registry Validation: {}\n\
             - Check Mode: {}\n\
             - File Output: {}\n\
             - Emitted Enum: {}\n\
             - Mapping Functions: {}\n\
             - Max Definitions: {}\n\
             - Global Logging: {}\n\
             - Structured Logging: {}",
            self.pipeline_stages,
            self.supports_registry_validation,
            self.supports_check_mode,
            self.supports_file_output,
            self.emitted_enum,
            self.mapping_functions.join(", "),
            self.max_definitions,
            self.global_logging_enabled,
            self.structured_logging_available
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "{}-stage taxonomy generator emitting {} with {} mapping functions",
            self.pipeline_stages,
            self.emitted_enum,
            self.mapping_functions.len()
        )
    }
}

/// Get pipeline capabilities information
pub fn get_pipeline_info() -> PipelineInfo {
    PipelineInfo {
        pipeline_stages: 3,
        supports_registry_validation: true,
        supports_check_mode: true,
        supports_file_output: true,
        emitted_enum: ENUM_NAME,
        mapping_functions: vec!["status_code", "api_code", "title", "message"],
        max_definitions: MAX_DEFINITIONS,
        global_logging_enabled: true,
        structured_logging_available: true,
    }
}
