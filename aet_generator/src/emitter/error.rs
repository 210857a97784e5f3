//! Error types for artifact rendering

/// Rendering failures
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("rendering generated source failed: {0}")]
    Render(#[from] std::fmt::Error),
}

impl EmitError {
    /// Get diagnostic code for the global logging system
    pub fn error_code(&self) -> crate::logging::codes::Code {
        use crate::logging::codes;
        match self {
            Self::Render(_) => codes::emitter::RENDER_FAILURE,
        }
    }
}
