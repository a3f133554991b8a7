//! Sequential batch passes over the whole catalog
//!
//! Each pass walks the index in insertion order, one request at a time,
//! pacing between items. The first error halts the pass; partial progress
//! is whatever the periodic saves already persisted.

use std::path::Path;

use tracing::{debug, info};

use gleaner_core::{store, Result};

use crate::session::Session;

/// Persist the index every this many iterations during a batch pass
const SAVE_INTERVAL: usize = 10;

/// Resolve a source link for every cataloged package that lacks one.
///
/// The index is persisted every 10th iteration and once more at the end.
/// Returns the number of packages that gained a link.
pub async fn resolve_all_links(session: &mut Session) -> Result<usize> {
    let names: Vec<String> = session.catalog.names().map(str::to_string).collect();
    let total = names.len();
    let mut resolved = 0;

    for (position, name) in names.iter().enumerate() {
        if session
            .catalog
            .record(name)
            .is_some_and(|record| record.has_link())
        {
            continue;
        }

        info!("[{}/{}] resolving {}", position + 1, total, name);
        if session.client.resolve_link(&mut session.catalog, name).await? {
            resolved += 1;
        } else {
            debug!("{name} has no source distribution");
        }

        if (position + 1) % SAVE_INTERVAL == 0 {
            session.catalog.save()?;
        }
        session.pace().await;
    }

    session.catalog.save()?;
    Ok(resolved)
}

/// Download the source archive of every package with a resolved link into
/// `dest_dir`. Returns the number of archives fetched.
pub async fn fetch_all_sources(session: &mut Session, dest_dir: &Path) -> Result<usize> {
    let names: Vec<String> = session.catalog.names().map(str::to_string).collect();
    let mut fetched = 0;

    for name in &names {
        let Session { catalog, fetcher, .. } = session;
        let record = catalog.record_mut(name);
        if !record.has_link() {
            continue;
        }

        info!("fetching {name}");
        fetcher.fetch_source(name, record, dest_dir).await?;
        fetched += 1;

        if fetched % SAVE_INTERVAL == 0 {
            session.catalog.save()?;
        }
        session.pace().await;
    }

    session.catalog.save()?;
    Ok(fetched)
}

/// Retrieve the metadata document of every cataloged package, writing each
/// to `<out_dir>/<name>.json`. Returns the number of documents written.
pub async fn fetch_all_metadata(session: &mut Session, out_dir: &Path) -> Result<usize> {
    let names: Vec<String> = session.catalog.names().map(str::to_string).collect();
    let total = names.len();
    let mut written = 0;

    for (position, name) in names.iter().enumerate() {
        info!("[{}/{}] metadata for {}", position + 1, total, name);
        let document = session.client.package_metadata(name).await?;
        store::write_json(&out_dir.join(format!("{name}.json")), &document)?;
        written += 1;

        if (position + 1) % SAVE_INTERVAL == 0 {
            session.catalog.save()?;
        }
        session.pace().await;
    }

    session.catalog.save()?;
    Ok(written)
}
