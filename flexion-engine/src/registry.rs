//! Loads all models once and indexes them for dispatch.

use std::sync::Arc;

use flexion_core::{LoadError, TextSource};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::loader;
use crate::model::Model;

/// Resource listing the irregular model names, one per line.
const MODELS_LISTING: &str = "models";

const REGULAR_AR: &str = "regular_ar";
const REGULAR_ER: &str = "regular_er";
const REGULAR_IR: &str = "regular_ir";

/// Owns every loaded model and the lookup indexes over them.
///
/// Built once by [`ModelRegistry::load`] and read-only afterwards, so it can
/// be shared across threads behind `&` or `Arc` without locking.
///
/// Duplicate-binding policy: when two irregular models bind the same verb,
/// the model that appears later in the `models` listing wins.
#[derive(Debug)]
pub struct ModelRegistry {
    models_by_name: FxHashMap<String, Arc<Model>>,
    irregular: FxHashMap<String, Arc<Model>>,
    regular_ar: Arc<Model>,
    regular_er: Arc<Model>,
    regular_ir: Arc<Model>,
}

impl ModelRegistry {
    /// Load every model from `source`.
    ///
    /// Two distinct failure paths: an irregular model that fails to load is
    /// skipped with a warning (reduced coverage, not an error), while
    /// failure to load any of the three regular models aborts the whole
    /// load — generation cannot proceed without them.
    pub fn load(source: &dyn TextSource) -> Result<Self, LoadError> {
        let mut models_by_name = FxHashMap::default();
        let mut irregular = FxHashMap::default();

        let listing = source.read(MODELS_LISTING).unwrap_or_else(|| {
            warn!("no irregular-model listing found; loading regular models only");
            String::new()
        });
        for name in listing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
        {
            match loader::load(source, name) {
                Ok(model) => {
                    let model = Arc::new(model);
                    for verb in &model.verbs {
                        irregular.insert(verb.clone(), Arc::clone(&model));
                    }
                    debug!(model = name, verbs = model.verbs.len(), "loaded irregular model");
                    models_by_name.insert(model.name.clone(), model);
                }
                Err(err) => warn!(model = name, error = %err, "skipping irregular model"),
            }
        }

        let regular_ar = load_regular(source, REGULAR_AR, &mut models_by_name)?;
        let regular_er = load_regular(source, REGULAR_ER, &mut models_by_name)?;
        let regular_ir = load_regular(source, REGULAR_IR, &mut models_by_name)?;

        Ok(Self {
            models_by_name,
            irregular,
            regular_ar,
            regular_er,
            regular_ir,
        })
    }

    /// Look up a model by name.
    pub fn by_name(&self, name: &str) -> Option<&Model> {
        self.models_by_name.get(name).map(|model| model.as_ref())
    }

    /// Select the model governing `infinitive`: an explicit irregular
    /// binding first, then the regular model for its ending, else `None`.
    pub fn model_for(&self, infinitive: &str) -> Option<&Model> {
        if let Some(model) = self.irregular.get(infinitive) {
            return Some(model.as_ref());
        }
        if infinitive.ends_with("ar") {
            return Some(self.regular_ar.as_ref());
        }
        if infinitive.ends_with("er") {
            return Some(self.regular_er.as_ref());
        }
        if infinitive.ends_with("ir") {
            return Some(self.regular_ir.as_ref());
        }
        None
    }

    /// Number of loaded models, regular ones included.
    pub fn model_count(&self) -> usize {
        self.models_by_name.len()
    }

    /// Number of infinitives with an explicit irregular binding.
    pub fn irregular_verb_count(&self) -> usize {
        self.irregular.len()
    }
}

fn load_regular(
    source: &dyn TextSource,
    name: &str,
    models_by_name: &mut FxHashMap<String, Arc<Model>>,
) -> Result<Arc<Model>, LoadError> {
    let model = Arc::new(loader::load(source, name)?);
    debug!(model = name, "loaded regular model");
    models_by_name.insert(model.name.clone(), Arc::clone(&model));
    Ok(model)
}
