//! Catalog construction and link-resolution tests against a mock index

mod common;

use common::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gleaner_core::DataDir;
use gleaner_index::{Catalog, PackageRecord};

#[tokio::test]
async fn first_run_catalogs_names_with_empty_records() {
    let server = MockServer::start().await;
    mock_root_listing(&server, &["numpy", "pandas", "requests"]).await;
    mock_popular(&server, &["numpy"]).await;

    let dir = TempDir::new().unwrap();
    let client = client_for(&server);
    let catalog = client.open_catalog(DataDir::new(dir.path())).await.unwrap();

    assert_eq!(catalog.len(), 3);
    for name in ["numpy", "pandas", "requests"] {
        assert_eq!(catalog.record(name).unwrap(), &PackageRecord::default());
    }
    assert!(dir.path().join("package_names.json").is_file());
    assert!(dir.path().join("popular_packages.json").is_file());
}

#[tokio::test]
async fn persisted_catalog_is_reused_without_network() {
    let server = MockServer::start().await;

    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("package_names.json"),
        r#"{ "numpy": {}, "pandas": {} }"#,
    )
    .unwrap();
    std::fs::write(dir.path().join("popular_packages.json"), r#"["numpy"]"#).unwrap();

    let client = client_for(&server);
    let catalog = client.open_catalog(DataDir::new(dir.path())).await.unwrap();

    assert_eq!(catalog.len(), 2);
    assert!(catalog.is_popular("numpy"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn resolve_link_picks_last_source_archive() {
    let server = MockServer::start().await;
    let newest = format!(
        "https://files.example.invalid/pkg-1.1.tar.gz#sha256={FIXTURE_SHA256}"
    );
    mock_package_listing(
        &server,
        "pkg",
        &[
            &format!("https://files.example.invalid/pkg-1.0.tar.gz#sha256={FIXTURE_SHA256}"),
            "https://files.example.invalid/pkg-1.1-py3-none-any.whl#sha256=00ff",
            &newest,
        ],
    )
    .await;

    let dir = TempDir::new().unwrap();
    let mut catalog = Catalog::load(DataDir::new(dir.path())).unwrap();
    let client = client_for(&server);

    let found = client.resolve_link(&mut catalog, "pkg").await.unwrap();
    assert!(found);

    let record = catalog.record("pkg").unwrap();
    let link = record.source_link.as_deref().unwrap();
    assert!(link.starts_with("https"));
    assert_eq!(link, "https://files.example.invalid/pkg-1.1.tar.gz");

    let digest = record.digest.as_deref().unwrap();
    assert!(digest.starts_with("sha256="));
    assert_eq!(digest.len(), "sha256=".len() + 64);
}

#[tokio::test]
async fn resolve_link_resolves_relative_hrefs() {
    let server = MockServer::start().await;
    mock_package_listing(
        &server,
        "pkg",
        &[&format!("../../packages/pkg-1.0.tar.gz#sha256={FIXTURE_SHA256}")],
    )
    .await;

    let dir = TempDir::new().unwrap();
    let mut catalog = Catalog::load(DataDir::new(dir.path())).unwrap();
    let client = client_for(&server);

    assert!(client.resolve_link(&mut catalog, "pkg").await.unwrap());
    let link = catalog.record("pkg").unwrap().source_link.clone().unwrap();
    assert_eq!(link, format!("{}/packages/pkg-1.0.tar.gz", server.uri()));
}

#[tokio::test]
async fn resolve_link_without_candidates_reports_not_found() {
    let server = MockServer::start().await;
    mock_package_listing(
        &server,
        "pkg",
        &["https://files.example.invalid/pkg-1.0-py3-none-any.whl#sha256=00ff"],
    )
    .await;

    let dir = TempDir::new().unwrap();
    let mut catalog = Catalog::load(DataDir::new(dir.path())).unwrap();
    let client = client_for(&server);

    let found = client.resolve_link(&mut catalog, "pkg").await.unwrap();
    assert!(!found);
    assert!(catalog.record("pkg").is_none());
}

#[tokio::test]
async fn resolve_link_propagates_transport_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/simple/pkg/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut catalog = Catalog::load(DataDir::new(dir.path())).unwrap();
    let client = client_for(&server);

    let err = client.resolve_link(&mut catalog, "pkg").await.unwrap_err();
    assert!(err.is_fetch());
}

#[tokio::test]
async fn metadata_document_surfaces_expected_keys() {
    let server = MockServer::start().await;
    let document = serde_json::json!({
        "info": { "name": "numpy" },
        "last_serial": 123,
        "releases": {},
        "urls": [],
        "vulnerabilities": []
    });
    Mock::given(method("GET"))
        .and(path("/pypi/numpy/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let metadata = client.package_metadata("numpy").await.unwrap();

    for key in ["info", "last_serial", "releases", "urls", "vulnerabilities"] {
        assert!(metadata.get(key).is_some(), "missing key {key}");
    }
}

#[tokio::test]
async fn malformed_metadata_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pypi/broken/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json {"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.package_metadata("broken").await.unwrap_err();
    assert!(err.is_fetch());
}
