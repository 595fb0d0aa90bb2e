//! Name-addressable text resources.
//!
//! The engine reads every conjugation definition through [`TextSource`],
//! keeping it independent of where the data lives. [`DirSource`] serves a
//! data directory on disk; [`MemorySource`] backs tests with inline
//! fixtures.

mod dir;
mod memory;

pub use dir::DirSource;
pub use memory::MemorySource;

/// A read-only source of text resources, addressed by name.
pub trait TextSource: Send + Sync {
    /// Read the named resource as text, or `None` if it does not exist.
    fn read(&self, name: &str) -> Option<String>;
}
