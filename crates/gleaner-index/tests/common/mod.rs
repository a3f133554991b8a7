//! Shared helpers for catalog integration tests
//!
//! Wiremock-backed stand-ins for the simple index, the metadata endpoint,
//! and the download-rank document.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gleaner_index::{CatalogClient, Endpoints};

/// A well-formed 64-hex digest for listing fixtures
pub const FIXTURE_SHA256: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";

/// Endpoint set aimed at `server`
pub fn endpoints_for(server: &MockServer) -> Endpoints {
    Endpoints {
        simple: format!("{}/simple/", server.uri()),
        metadata: format!("{}/pypi/", server.uri()),
        popular: format!("{}/top/top-packages.json", server.uri()),
    }
}

/// Catalog client aimed at `server`
pub fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new()
        .unwrap()
        .with_endpoints(endpoints_for(server))
}

/// Mount the root listing naming every package in `names`
pub async fn mock_root_listing(server: &MockServer, names: &[&str]) {
    let anchors: String = names
        .iter()
        .map(|name| format!("    <a href=\"{name}/\">{name}</a>\n"))
        .collect();
    let body = format!("<!DOCTYPE html>\n<html>\n  <body>\n{anchors}  </body>\n</html>\n");

    Mock::given(method("GET"))
        .and(path("/simple/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mount a per-package listing page carrying the given file hrefs
pub async fn mock_package_listing(server: &MockServer, name: &str, hrefs: &[&str]) {
    let anchors: String = hrefs
        .iter()
        .map(|href| format!("    <a href=\"{href}\">{href}</a>\n"))
        .collect();
    let body = format!("<!DOCTYPE html>\n<html>\n  <body>\n{anchors}  </body>\n</html>\n");

    Mock::given(method("GET"))
        .and(path(format!("/simple/{name}/")))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mount the download-rank document listing `projects`
pub async fn mock_popular(server: &MockServer, projects: &[&str]) {
    let rows: Vec<serde_json::Value> = projects
        .iter()
        .map(|project| serde_json::json!({ "project": project, "download_count": 1 }))
        .collect();
    let body = serde_json::json!({ "rows": rows });

    Mock::given(method("GET"))
        .and(path("/top/top-packages.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
