//! AET generator - API Error Taxonomy generator
//!
//! Maintains the canonical registry of REST API error conditions and derives
//! the strongly-typed representation consumed by the validator-facing
//! codebase. One deterministic batch pass: Registry -> Extractor -> Emitter.

// Internal modules
pub mod config;
pub mod emitter;
pub mod extractor;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod registry;

// Re-export key types for library consumers
pub use pipeline::{CheckReport, GenerationError, GenerationResult};
pub use registry::{ErrorDefinition, RawErrorDefinition, Registry, RegistryError};
