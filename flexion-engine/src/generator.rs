//! Public entry point: infinitive in, ordered simple forms out.

use flexion_core::{LoadError, TextSource};

use crate::model::Model;
use crate::registry::ModelRegistry;

/// Generates the simple conjugated forms of Spanish infinitives.
///
/// Dispatch order: an explicit irregular binding wins over the infinitive's
/// surface ending (so "ser" never falls through to the regular "-er"
/// model); otherwise the ending selects one of the three regular models;
/// anything else is unrecognized.
#[derive(Debug)]
pub struct FlexionGenerator {
    registry: ModelRegistry,
}

impl FlexionGenerator {
    /// Wrap an already-loaded registry.
    pub fn new(registry: ModelRegistry) -> Self {
        Self { registry }
    }

    /// Load the registry from `source` and build a generator over it.
    pub fn from_source(source: &dyn TextSource) -> Result<Self, LoadError> {
        Ok(Self::new(ModelRegistry::load(source)?))
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// The model that would govern `infinitive`, if any.
    pub fn model_for(&self, infinitive: &str) -> Option<&Model> {
        self.registry.model_for(infinitive)
    }

    /// Every simple form of `infinitive`, in model order.
    ///
    /// `None` means no model applies (unrecognized infinitive); a matched
    /// model always yields a non-empty list, so the two outcomes are never
    /// conflated. Purely functional: repeated calls return identical
    /// results.
    pub fn simple_forms(&self, infinitive: &str) -> Option<Vec<String>> {
        let model = self.registry.model_for(infinitive)?;
        model.simple_forms(infinitive)
    }
}
