//! Shared helpers for driver integration tests
//!
//! Seeds persisted catalog state on disk and stands up wiremock endpoints
//! shaped like the index pages and archive hosts the drivers talk to.

use std::path::Path;
use std::time::Duration;

use flate2::write::GzEncoder;
use flate2::Compression;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gleaner_core::DataDir;
use gleaner_curate::Session;
use gleaner_index::{CatalogClient, Endpoints};

/// A well-formed 64-hex digest for listing fixtures
pub const FIXTURE_SHA256: &str = "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08";

/// Write persisted index and popularity files under `dir`
pub fn seed_state(dir: &Path, index_json: &str, popular_json: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join("package_names.json"), index_json).unwrap();
    std::fs::write(dir.join("popular_packages.json"), popular_json).unwrap();
}

/// Build an unpaced, progress-free session over seeded state, aimed at
/// `server`
pub async fn session_for(server: &MockServer, dir: &Path) -> Session {
    let client = CatalogClient::new().unwrap().with_endpoints(Endpoints {
        simple: format!("{}/simple/", server.uri()),
        metadata: format!("{}/pypi/", server.uri()),
        popular: format!("{}/top/top-packages.json", server.uri()),
    });

    Session::with_client(DataDir::new(dir), client)
        .await
        .unwrap()
        .with_pace(Duration::ZERO)
        .with_progress(false)
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

/// Mount archive bytes at `/packages/<file>`
pub async fn mock_archive(server: &MockServer, file: &str, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(format!("/packages/{file}")))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Build an in-memory source distribution: a gzip tar with the given
/// members
pub fn sdist_bytes(members: &[(&str, &[u8])]) -> Vec<u8> {
    let encoder = GzEncoder::new(Vec::new(), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (member_path, content) in members {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        builder.append_data(&mut header, member_path, *content).unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap()
}
