//! Builds models from metadata and suffix-listing resources.
//!
//! A model `m` is defined by two resources: `m.toml`, key-value metadata
//! with a required `suffix` and an optional `verbs` token list, and
//! `m.suffixes`, one flexing suffix per line.

use flexion_core::{LoadError, TextSource};
use serde::Deserialize;

use crate::model::Model;

/// Model metadata, as stored in `<name>.toml`.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ModelMeta {
    /// Infinitive ending the model strips. Required.
    suffix: Option<String>,
    /// Whitespace/comma-separated infinitives bound to the model.
    verbs: Option<String>,
}

/// Load the named model from `source`.
///
/// Fails if either resource is missing, the metadata does not parse, the
/// `suffix` key is absent, or the suffix listing yields no entries.
pub fn load(source: &dyn TextSource, name: &str) -> Result<Model, LoadError> {
    let meta_raw = read_required(source, &format!("{name}.toml"))?;
    let meta: ModelMeta = toml::from_str(&meta_raw).map_err(|err| LoadError::Metadata {
        name: name.to_string(),
        message: err.to_string(),
    })?;
    let suffix = meta.suffix.ok_or_else(|| LoadError::MissingSuffix {
        name: name.to_string(),
    })?;
    let verbs = meta.verbs.as_deref().map(tokenize).unwrap_or_default();

    let listing = read_required(source, &format!("{name}.suffixes"))?;
    let flexing_suffixes = parse_suffix_listing(&listing);
    if flexing_suffixes.is_empty() {
        return Err(LoadError::EmptySuffixListing {
            name: name.to_string(),
        });
    }

    Ok(Model {
        name: name.to_string(),
        suffix,
        flexing_suffixes,
        verbs,
    })
}

fn read_required(source: &dyn TextSource, name: &str) -> Result<String, LoadError> {
    source.read(name).ok_or_else(|| LoadError::MissingResource {
        name: name.to_string(),
    })
}

/// Split a `verbs` value on whitespace and commas, dropping empty tokens.
fn tokenize(value: &str) -> Vec<String> {
    value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Line policy for suffix listings: every line is trimmed; blank lines and
/// `#` comments contribute nothing; a line of exactly `@` is an empty
/// suffix (the form equals the bare root); anything else is taken verbatim.
fn parse_suffix_listing(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            if line == "@" {
                String::new()
            } else {
                line.to_string()
            }
        })
        .collect()
}
