//! flexion-core: Shared foundation for the flexion conjugation engine
//!
//! - Errors: load-time error types shared across the workspace
//! - Source: name-addressable text resources (filesystem or in-memory)
//! - Tracing: logging initialization

pub mod errors;
pub mod source;
pub mod tracing;

// Re-exports for convenience
pub use errors::LoadError;
pub use source::{DirSource, MemorySource, TextSource};
pub use self::tracing::init_tracing;
