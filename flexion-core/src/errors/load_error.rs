//! Model loading errors.

/// Errors that can occur while loading conjugation models.
///
/// Whether a variant is fatal is a registry policy, not a property of the
/// error: the same failure that aborts a regular-model load only skips an
/// irregular one.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Resource not found: {name}")]
    MissingResource { name: String },

    #[error("Metadata parse error in model {name}: {message}")]
    Metadata { name: String, message: String },

    #[error("Model {name} metadata lacks the required `suffix` key")]
    MissingSuffix { name: String },

    #[error("Model {name} has an empty flexing-suffix listing")]
    EmptySuffixListing { name: String },
}
