//! Registry lookups as the CLI uses them.

use md_babel::{ConvertError, DialectId, DialectRegistry};

#[test]
fn test_every_dialect_has_a_name() {
    let registry = DialectRegistry::default();
    for id in registry.list_dialects() {
        let dialect = registry.get(id).unwrap();
        assert!(!dialect.name().is_empty());
        assert_eq!(dialect.name(), id.display_name());
    }
}

#[test]
fn test_parse_then_lookup() {
    let registry = DialectRegistry::default();
    let id: DialectId = "kramdown".parse().unwrap();
    assert_eq!(registry.get(id).unwrap().file_extensions(), &["kramdown", "kd"]);
}

#[test]
fn test_unknown_dialect_message() {
    let err = "textile".parse::<DialectId>().unwrap_err();
    assert_eq!(err, ConvertError::UnknownDialect("textile".to_string()));
    assert_eq!(err.to_string(), "Unknown dialect 'textile'");
}

#[test]
fn test_detection() {
    let registry = DialectRegistry::default();
    assert_eq!(registry.detect_from_filename("a.kd"), Some(DialectId::Kramdown));
    assert_eq!(registry.detect_from_filename("a.markdown"), Some(DialectId::Gfm));
    assert_eq!(registry.detect_from_filename("a.obsidian"), None);
}
