//! Loading indexes from built sites, and what failure does to the widget.

use super::common::{fixture_site, FIXTURE_SITE};
use sitesearch::{load_from_site, load_path, LoadError, Readiness, SearchConfig, SiteSearch};
use std::fs;
use std::path::Path;

#[test]
fn test_fixture_site_loads() {
    let docs = load_from_site(&fixture_site(), "/search.json").unwrap();
    assert_eq!(docs.len(), 6);
    assert_eq!(docs[3].categories(), &[] as &[String]);
    assert_eq!(docs[3].date, None);
    assert_eq!(docs[2].kind, "publication");
}

#[test]
fn test_relative_fixture_path_resolves_from_manifest() {
    assert!(fixture_site().ends_with(Path::new(FIXTURE_SITE)));
}

#[test]
fn test_missing_index_is_404_with_server_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_from_site(dir.path(), "/search.json").unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "HTTP error! status: 404 (/search.json)");
}

#[test]
fn test_custom_index_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("assets")).unwrap();
    fs::write(
        dir.path().join("assets/index.json"),
        r#"[{"title": "Only", "url": "/only", "type": "post"}]"#,
    )
    .unwrap();

    let docs = load_path(dir.path(), "/assets/index.json").unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].excerpt, "");
    assert!(docs[0].tags().is_empty());
}

#[test]
fn test_malformed_index_disables_search() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("search.json"), "<html>not json</html>").unwrap();

    let mut site = SiteSearch::new(SearchConfig::default());
    let loaded = load_from_site(dir.path(), &site.config().index_path);
    assert!(matches!(loaded, Err(LoadError::Parse(_))));

    assert_eq!(site.attach(loaded), Readiness::Disabled);
    assert!(site.modal().is_none());
    assert!(matches!(site.load_error(), Some(LoadError::Parse(_))));
}

#[test]
fn test_document_missing_required_field_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("search.json"),
        r#"[{"title": "No url", "type": "post"}]"#,
    )
    .unwrap();
    let err = load_from_site(dir.path(), "/search.json").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}
