//! Filesystem-backed text source.

use std::fs;
use std::path::PathBuf;

use super::TextSource;

/// Serves resources from files under a root directory, addressed by file
/// name relative to that root.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }
}

impl TextSource for DirSource {
    fn read(&self, name: &str) -> Option<String> {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "resource not readable");
                None
            }
        }
    }
}
