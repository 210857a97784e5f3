//! Error types for taxonomy extraction

/// Extraction failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("registry holds {count} definitions, more than the configured maximum of {limit}")]
    CapacityExceeded { count: usize, limit: usize },
}

impl ExtractionError {
    pub fn capacity_exceeded(count: usize, limit: usize) -> Self {
        Self::CapacityExceeded { count, limit }
    }

    /// Get diagnostic code for the global logging system
    pub fn error_code(&self) -> crate::logging::codes::Code {
        use crate::logging::codes;
        match self {
            Self::CapacityExceeded { .. } => codes::extractor::CAPACITY_EXCEEDED,
        }
    }
}
