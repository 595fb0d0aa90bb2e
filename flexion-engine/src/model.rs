//! Conjugation model: an infinitive ending plus ordered flexing suffixes.

/// A named conjugation pattern.
///
/// The order of `flexing_suffixes` is a positional contract with callers:
/// form `i` of every verb governed by this model comes from entry `i`. An
/// empty entry yields the bare root. Models are built once by the loader
/// and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// Model name, unique within a registry.
    pub name: String,
    /// Infinitive ending this model strips (e.g. "ar").
    pub suffix: String,
    /// Ordered flexing suffixes, one per generated form.
    pub flexing_suffixes: Vec<String>,
    /// Infinitives explicitly governed by this model (irregular models only).
    pub verbs: Vec<String>,
}

impl Model {
    /// The stem the flexing suffixes are appended to, or `None` when the
    /// infinitive does not end with this model's suffix.
    pub fn root<'a>(&self, infinitive: &'a str) -> Option<&'a str> {
        infinitive.strip_suffix(self.suffix.as_str())
    }

    /// All simple forms of `infinitive` under this model, in suffix order.
    ///
    /// Repeated forms are kept — distinct persons may legitimately share a
    /// surface form. `None` only on a suffix mismatch, which well-formed
    /// definitions never produce (dispatch is keyed on the ending).
    pub fn simple_forms(&self, infinitive: &str) -> Option<Vec<String>> {
        let root = self.root(infinitive)?;
        Some(
            self.flexing_suffixes
                .iter()
                .map(|suffix| format!("{root}{suffix}"))
                .collect(),
        )
    }
}
