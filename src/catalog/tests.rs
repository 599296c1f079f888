//! Tests for the example registry.

use tempfile::TempDir;

use crate::error::StylebookError;

use super::{CatalogFile, Registry, Snippet, load_catalog_file};

// =========================================================================
// Helper functions
// =========================================================================

fn sample() -> Vec<Snippet> {
    vec![
        Snippet::new("ex1", "Demo")
            .with_body(&["a"])
            .with_tags(&["full-stop-comment"]),
        Snippet::new("ex2", "Second").with_body(&["b"]),
        Snippet::new("bad-one", "Bad").negative(),
    ]
}

// =========================================================================
// list / get
// =========================================================================

#[test]
fn list_keeps_catalog_order() {
    let registry = Registry::new(sample()).unwrap();
    let ids: Vec<&str> = registry.list().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["ex1", "ex2", "bad-one"]);
}

#[test]
fn list_is_restartable() {
    let registry = Registry::new(sample()).unwrap();
    assert_eq!(registry.list(), registry.list());
}

#[test]
fn get_returns_listed_snippet() {
    let registry = Registry::new(sample()).unwrap();
    for snippet in registry.list() {
        assert_eq!(registry.get(&snippet.id).unwrap(), snippet);
    }
}

#[test]
fn get_builtin_returns_listed_snippet() {
    let registry = Registry::builtin().unwrap();
    for snippet in registry.list() {
        assert_eq!(registry.get(&snippet.id).unwrap(), snippet);
    }
}

#[test]
fn get_missing_is_not_found() {
    let registry = Registry::new(sample()).unwrap();
    match registry.get("missing") {
        Err(StylebookError::NotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn duplicate_ids_are_rejected() {
    let err = Registry::new(vec![Snippet::new("a", "A"), Snippet::new("a", "Again")]).unwrap_err();
    assert!(matches!(err, StylebookError::CatalogError(_)));
    assert!(err.to_string().contains("duplicate snippet id 'a'"));
}

#[test]
fn empty_id_is_rejected() {
    let err = Registry::new(vec![Snippet::new("ok", "A"), Snippet::new("  ", "B")]).unwrap_err();
    assert!(err.to_string().contains("snippet #2 has an empty id"));
}

#[test]
fn repeated_tags_are_collapsed() {
    let registry = Registry::new(vec![
        Snippet::new("a", "A").with_tags(&["x", "y", "x"]),
    ])
    .unwrap();
    assert_eq!(registry.get("a").unwrap().tags, vec!["x", "y"]);
}

#[test]
fn builtin_ids_are_unique() {
    let registry = Registry::builtin().unwrap();
    assert_eq!(registry.len(), super::builtin_snippets().len());
}

#[test]
fn builtin_has_good_and_negative_examples() {
    let registry = Registry::builtin().unwrap();
    assert!(registry.list().iter().any(|s| s.negative));
    assert!(registry.list().iter().any(|s| !s.negative));
    assert!(registry.list().iter().any(|s| s.tags.is_empty()));
}

// =========================================================================
// select
// =========================================================================

#[test]
fn select_without_patterns_returns_all() {
    let registry = Registry::new(sample()).unwrap();
    assert_eq!(registry.select(&[]).unwrap().len(), 3);
}

#[test]
fn select_by_glob_keeps_catalog_order() {
    let registry = Registry::new(sample()).unwrap();
    let selected = registry
        .select(&["bad-*".to_string(), "ex1".to_string()])
        .unwrap();
    let ids: Vec<&str> = selected.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["ex1", "bad-one"]);
}

#[test]
fn select_with_no_match_is_empty() {
    let registry = Registry::new(sample()).unwrap();
    assert!(registry.select(&["zzz*".to_string()]).unwrap().is_empty());
}

#[test]
fn select_with_invalid_glob_is_user_error() {
    let registry = Registry::new(sample()).unwrap();
    let err = registry.select(&["[".to_string()]).unwrap_err();
    assert!(matches!(err, StylebookError::UserError(_)));
}

// =========================================================================
// Catalog files
// =========================================================================

#[test]
fn parse_catalog_yaml() {
    let yaml = r#"
snippets:
  - id: ex1
    title: Demo
    body: ["a"]
    tags: [full-stop-comment]
  - id: bad
    title: Bad example
    description: ["Shows the mistake."]
    body:
      - "} else {"
    tags: [else-on-new-line]
    negative: true
"#;
    let registry = CatalogFile::from_yaml(yaml).unwrap().into_registry().unwrap();

    let ex1 = registry.get("ex1").unwrap();
    assert_eq!(ex1.title, "Demo");
    assert_eq!(ex1.body, vec!["a"]);
    assert_eq!(ex1.tags, vec!["full-stop-comment"]);
    assert!(!ex1.negative);
    assert!(ex1.description.is_empty());

    let bad = registry.get("bad").unwrap();
    assert!(bad.negative);
    assert_eq!(bad.description, vec!["Shows the mistake."]);
    assert_eq!(bad.body, vec!["} else {"]);
}

#[test]
fn parse_empty_catalog() {
    let registry = CatalogFile::from_yaml("{}").unwrap().into_registry().unwrap();
    assert!(registry.is_empty());
}

#[test]
fn parse_invalid_catalog_is_catalog_error() {
    let err = CatalogFile::from_yaml("snippets: [ {title: no id} ]").unwrap_err();
    assert!(matches!(err, StylebookError::CatalogError(_)));
}

#[test]
fn catalog_file_round_trip_preserves_snippets() {
    let file = CatalogFile {
        snippets: super::builtin_snippets(),
    };
    let yaml = file.to_yaml().unwrap();
    let parsed = CatalogFile::from_yaml(&yaml).unwrap();
    assert_eq!(parsed.snippets, file.snippets);
}

#[test]
fn load_catalog_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(&path, "snippets:\n  - id: one\n    title: One\n").unwrap();

    let registry = load_catalog_file(&path).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.get("one").unwrap().body.is_empty());
}

#[test]
fn load_missing_catalog_file() {
    let dir = TempDir::new().unwrap();
    let err = load_catalog_file(dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read catalog file"));
}

#[test]
fn load_catalog_with_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(
        &path,
        "snippets:\n  - id: one\n    title: One\n  - id: one\n    title: Two\n",
    )
    .unwrap();

    let err = load_catalog_file(&path).unwrap_err();
    assert!(err.to_string().contains("duplicate snippet id 'one'"));
}
