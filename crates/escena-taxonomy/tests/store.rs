//! Tests for store loading, overrides and the structural check report.

use std::fs;
use std::path::{Path, PathBuf};

use escena_model::{Domain, TaxonomyNode};
use escena_taxonomy::{
    StoreConfig, TableSource, TaxonomyError, TaxonomyStore, builtin_store, children_of,
};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "escena-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn builtin_store_has_every_domain() {
    let store = builtin_store().unwrap();
    for domain in Domain::ALL {
        assert_eq!(store.root(domain).id, domain.as_str());
        assert!(!children_of(store.root(domain), &[]).is_empty());
    }
}

#[test]
fn builtin_store_is_shared() {
    let first = builtin_store().unwrap();
    let second = builtin_store().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn store_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TaxonomyStore>();
}

#[test]
fn override_directory_replaces_one_domain() {
    let dir = unique_temp_dir("override");
    write(
        &dir.join("events.toml"),
        r#"
id = "events"

[[children]]
id = "popup"
names = { es = "Pop-up", en = "Pop-up" }
"#,
    );

    let config = StoreConfig::default().with_directory(Some(dir.clone()));
    assert_eq!(config.source, TableSource::Directory(dir));
    let store = TaxonomyStore::load(&config).unwrap();

    let events: Vec<&str> = children_of(store.root(Domain::Events), &[])
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(events, vec!["popup"]);
    // Domains without an override file keep the embedded table.
    assert!(!children_of(store.root(Domain::Artists), &["music"]).is_empty());
}

#[test]
fn missing_override_directory_fails_fast() {
    let config = StoreConfig::default().with_directory(Some(PathBuf::from(
        "/definitely/not/a/taxonomy/dir",
    )));
    let err = TaxonomyStore::load(&config).unwrap_err();
    assert!(matches!(err, TaxonomyError::DirectoryNotFound { .. }));
}

#[test]
fn duplicate_sibling_id_is_rejected() {
    let dir = unique_temp_dir("duplicate");
    write(
        &dir.join("venues.toml"),
        r#"
id = "venues"

[[children]]
id = "indoor"

[[children]]
id = "indoor"
"#,
    );
    let err = TaxonomyStore::load(&StoreConfig::default().with_directory(Some(dir))).unwrap_err();
    match err {
        TaxonomyError::DuplicateId { domain, id, .. } => {
            assert_eq!(domain, Domain::Venues);
            assert_eq!(id, "indoor");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn same_id_under_different_parents_is_fine() {
    let dir = unique_temp_dir("scoped");
    write(
        &dir.join("gallery.toml"),
        r#"
id = "gallery"

[[children]]
id = "paintings"

[[children.children]]
id = "other"

[[children]]
id = "prints"

[[children.children]]
id = "other"
"#,
    );
    let store = TaxonomyStore::load(&StoreConfig::default().with_directory(Some(dir))).unwrap();
    assert_eq!(children_of(store.root(Domain::Gallery), &["prints"]).len(), 1);
}

#[test]
fn wrong_root_is_rejected() {
    let dir = unique_temp_dir("root");
    write(&dir.join("artists.toml"), "id = \"events\"\n");
    let err = TaxonomyStore::load(&StoreConfig::default().with_directory(Some(dir))).unwrap_err();
    assert!(matches!(err, TaxonomyError::RootMismatch { .. }));
}

#[test]
fn malformed_table_reports_parse_error() {
    let dir = unique_temp_dir("parse");
    write(&dir.join("artists.toml"), "id = [\n");
    let err = TaxonomyStore::load(&StoreConfig::default().with_directory(Some(dir))).unwrap_err();
    assert!(matches!(err, TaxonomyError::Parse { .. }));
}

#[test]
fn from_roots_fills_missing_domains() {
    let store = TaxonomyStore::from_roots([(
        Domain::Gallery,
        TaxonomyNode::new("gallery").with_child(TaxonomyNode::new("digital")),
    )])
    .unwrap();
    assert_eq!(children_of(store.root(Domain::Gallery), &[]).len(), 1);
    assert!(children_of(store.root(Domain::Artists), &[]).is_empty());
}

#[test]
fn from_roots_checks_tree_invariants() {
    let duplicate = TaxonomyStore::from_roots([(
        Domain::Venues,
        TaxonomyNode::new("venues")
            .with_child(TaxonomyNode::new("outdoor"))
            .with_child(TaxonomyNode::new("outdoor")),
    )])
    .unwrap_err();
    assert!(matches!(duplicate, TaxonomyError::DuplicateId { .. }));

    let mismatch =
        TaxonomyStore::from_roots([(Domain::Events, TaxonomyNode::new("venues"))]).unwrap_err();
    assert!(matches!(mismatch, TaxonomyError::RootMismatch { .. }));

    let too_deep = TaxonomyStore::from_roots([(
        Domain::Gallery,
        TaxonomyNode::new("gallery").with_child(
            TaxonomyNode::new("prints")
                .with_child(TaxonomyNode::new("etching").with_child(TaxonomyNode::new("drypoint"))),
        ),
    )])
    .unwrap_err();
    assert!(matches!(too_deep, TaxonomyError::TooDeep { .. }));
}

#[test]
fn check_report_is_stable() {
    let report = TaxonomyStore::builtin().unwrap().check();
    insta::assert_json_snapshot!(report);
}
