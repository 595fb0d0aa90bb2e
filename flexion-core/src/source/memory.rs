//! In-memory text source.
//!
//! The fixture source used throughout the tests; also usable for embedding
//! definitions directly in a binary.

use rustc_hash::FxHashMap;

use super::TextSource;

/// Holds named resources in a map.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: FxHashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource, builder-style.
    pub fn with(mut self, name: &str, text: &str) -> Self {
        self.insert(name, text);
        self
    }

    /// Add a resource in place, replacing any previous text under `name`.
    pub fn insert(&mut self, name: &str, text: &str) {
        self.entries.insert(name.to_string(), text.to_string());
    }
}

impl TextSource for MemorySource {
    fn read(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let source = MemorySource::new().with("models", "ser\nestar\n");
        assert_eq!(source.read("models").unwrap(), "ser\nestar\n");
        assert!(source.read("regular_ar.toml").is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut source = MemorySource::new();
        source.insert("models", "ser\n");
        source.insert("models", "estar\n");
        assert_eq!(source.read("models").unwrap(), "estar\n");
    }
}
