use crate::emitter::EmitError;
use crate::extractor::ExtractionError;
use crate::registry::RegistryError;

/// Pipeline processing errors
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("registry validation failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("taxonomy extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("artifact rendering failed: {0}")]
    Emit(#[from] EmitError),

    #[error("pipeline error: {message}")]
    Pipeline { message: String },
}

impl GenerationError {
    pub fn pipeline_error(message: &str) -> Self {
        Self::Pipeline {
            message: message.to_string(),
        }
    }

    /// Get diagnostic code for the global logging system
    pub fn error_code(&self) -> crate::logging::codes::Code {
        use crate::logging::codes;
        match self {
            Self::Registry(e) => e.error_code(),
            Self::Extraction(e) => e.error_code(),
            Self::Emit(e) => e.error_code(),
            Self::Pipeline { .. } => codes::system::INTERNAL_ERROR,
        }
    }
}
