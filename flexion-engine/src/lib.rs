//! flexion-engine: Data-driven Spanish verb conjugation
//!
//! Generates every simple (non-compound) form of a Spanish verb from its
//! infinitive. All conjugation knowledge lives in declarative model
//! definitions read through [`flexion_core::TextSource`]; the engine never
//! infers rules, it only strips an infinitive ending and appends flexing
//! suffixes.
//!
//! - Model: a named pattern (ending to strip + ordered flexing suffixes)
//! - Loader: builds models from metadata and suffix listings
//! - Registry: loads everything once, indexes by name and by irregular verb
//! - Generator: dispatches an infinitive to its model and produces the forms

pub mod generator;
pub mod loader;
pub mod model;
pub mod registry;

// Re-exports for convenience
pub use generator::FlexionGenerator;
pub use model::Model;
pub use registry::ModelRegistry;
