//! End-to-end tests for dispatch and generation over fixture sources.

use flexion_core::{LoadError, MemorySource};
use flexion_engine::FlexionGenerator;

/// Minimal regular models: present-tense singular only.
fn regular_fixture() -> MemorySource {
    MemorySource::new()
        .with("regular_ar.toml", "suffix = \"ar\"\n")
        .with("regular_ar.suffixes", "o\nas\na\n")
        .with("regular_er.toml", "suffix = \"er\"\n")
        .with("regular_er.suffixes", "o\nes\ne\n")
        .with("regular_ir.toml", "suffix = \"ir\"\n")
        .with("regular_ir.suffixes", "o\nes\ne\n")
}

fn generator(source: &MemorySource) -> FlexionGenerator {
    FlexionGenerator::from_source(source).unwrap()
}

#[test]
fn test_regular_ar_forms() {
    let gen = generator(&regular_fixture());
    assert_eq!(
        gen.simple_forms("cantar").unwrap(),
        vec!["canto", "cantas", "canta"]
    );
}

#[test]
fn test_regular_er_forms() {
    let gen = generator(&regular_fixture());
    assert_eq!(
        gen.simple_forms("temer").unwrap(),
        vec!["temo", "temes", "teme"]
    );
}

#[test]
fn test_regular_ir_forms() {
    let gen = generator(&regular_fixture());
    assert_eq!(
        gen.simple_forms("vivir").unwrap(),
        vec!["vivo", "vives", "vive"]
    );
}

#[test]
fn test_irregular_binding_beats_surface_ending() {
    // "ser" ends in "er" but is bound to its own whole-form model.
    let source = regular_fixture()
        .with("models", "ser\n")
        .with("ser.toml", "suffix = \"ser\"\nverbs = \"ser\"\n")
        .with("ser.suffixes", "soy\neres\nes\n");
    let gen = generator(&source);
    assert_eq!(gen.simple_forms("ser").unwrap(), vec!["soy", "eres", "es"]);
    // Unbound -er verbs still go through the regular model.
    assert_eq!(
        gen.simple_forms("temer").unwrap(),
        vec!["temo", "temes", "teme"]
    );
}

#[test]
fn test_unrecognized_infinitive() {
    let gen = generator(&regular_fixture());
    assert_eq!(gen.simple_forms("xyz"), None);
}

#[test]
fn test_generation_is_idempotent() {
    let gen = generator(&regular_fixture());
    assert_eq!(gen.simple_forms("cantar"), gen.simple_forms("cantar"));
}

#[test]
fn test_matched_model_never_yields_empty_list() {
    let gen = generator(&regular_fixture());
    assert!(!gen.simple_forms("cantar").unwrap().is_empty());
}

#[test]
fn test_bare_root_marker_end_to_end() {
    // `@` produces the bare root as a form; blank and comment lines do not
    // count toward the list length.
    let source = regular_fixture()
        .with("models", "defectivo\n")
        .with("defectivo.toml", "suffix = \"ar\"\nverbs = \"cortar\"\n")
        .with("defectivo.suffixes", "# stem-only form first\n@\n\no\n");
    let gen = generator(&source);
    assert_eq!(gen.simple_forms("cortar").unwrap(), vec!["cort", "corto"]);
}

#[test]
fn test_duplicate_binding_later_model_wins() {
    let source = regular_fixture()
        .with("models", "ser_old\nser_new\n")
        .with("ser_old.toml", "suffix = \"ser\"\nverbs = \"ser\"\n")
        .with("ser_old.suffixes", "soy\n")
        .with("ser_new.toml", "suffix = \"ser\"\nverbs = \"ser\"\n")
        .with("ser_new.suffixes", "fui\n");
    let gen = generator(&source);
    // Both models stay addressable by name; the binding follows listing
    // order, last write wins.
    assert!(gen.registry().by_name("ser_old").is_some());
    assert_eq!(gen.simple_forms("ser").unwrap(), vec!["fui"]);
}

#[test]
fn test_broken_irregular_model_is_skipped() {
    // "estar" is listed but has no definition resources: the registry loads
    // anyway and the verb falls through to regular -ar dispatch.
    let source = regular_fixture().with("models", "estar\n");
    let gen = generator(&source);
    assert!(gen.registry().by_name("estar").is_none());
    assert_eq!(
        gen.simple_forms("estar").unwrap(),
        vec!["esto", "estas", "esta"]
    );
}

#[test]
fn test_missing_regular_model_aborts_load() {
    let source = MemorySource::new()
        .with("regular_ar.toml", "suffix = \"ar\"\n")
        .with("regular_ar.suffixes", "o\n")
        .with("regular_er.toml", "suffix = \"er\"\n")
        .with("regular_er.suffixes", "o\n");
    let err = FlexionGenerator::from_source(&source).unwrap_err();
    assert!(matches!(err, LoadError::MissingResource { name } if name == "regular_ir.toml"));
}
