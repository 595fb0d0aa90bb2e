//! Error types for the flexion workspace.

mod load_error;

pub use load_error::LoadError;
