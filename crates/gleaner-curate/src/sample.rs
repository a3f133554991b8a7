//! Uncommon-package sampling
//!
//! Picks packages outside the popularity set at random, without
//! replacement, and runs each through resolve, fetch, and build-script
//! extraction. Every visited candidate is marked and persisted so a rerun
//! never revisits it; per-item failures are logged and skipped rather
//! than halting the pass.

use std::path::Path;

use rand::Rng;
use tracing::{debug, info, warn};

use gleaner_archive::extract_build_scripts;
use gleaner_core::Result;

use crate::session::Session;

/// Outcome of a sampling pass
#[derive(Debug, Default)]
pub struct SampleReport {
    /// Candidates visited, successful or not
    pub visited: usize,

    /// Candidates that yielded at least one extracted build script
    pub extracted: usize,
}

/// Sample uncommon packages until `count` of them have yielded a build
/// script or the candidate pool is exhausted, whichever comes first.
///
/// Archives land in `dest_dir`; extracted build scripts in `extract_dir`.
pub async fn sample_uncommon(
    session: &mut Session,
    extract_dir: &Path,
    dest_dir: &Path,
    count: usize,
) -> Result<SampleReport> {
    let mut pool = session.catalog.uncommon_candidates();
    info!(
        "Sampling from {} uncommon candidates, target {count}",
        pool.len()
    );

    let mut report = SampleReport::default();

    while report.extracted < count && !pool.is_empty() {
        // ThreadRng is not held across awaits, so the pass stays Send.
        let pick = rand::rng().random_range(0..pool.len());
        let name = pool.swap_remove(pick);
        report.visited += 1;

        match sample_one(session, &name, extract_dir, dest_dir).await {
            Ok(true) => {
                report.extracted += 1;
                info!("Extracted build scripts from {name} ({}/{count})", report.extracted);
            }
            Ok(false) => debug!("{name} yielded no build script"),
            Err(err) => warn!("Skipping {name}: {err}"),
        }

        // Mark the visit regardless of outcome and persist, so a rerun
        // never picks this candidate again.
        session.catalog.record_mut(&name).downloaded = Some(true);
        session.catalog.save()?;
        session.pace().await;
    }

    info!(
        "Sampling finished: {} visited, {} extracted",
        report.visited, report.extracted
    );
    Ok(report)
}

/// Resolve, fetch, and mine one candidate. True when extraction yielded at
/// least one build script.
async fn sample_one(
    session: &mut Session,
    name: &str,
    extract_dir: &Path,
    dest_dir: &Path,
) -> Result<bool> {
    let found = session.client.resolve_link(&mut session.catalog, name).await?;
    if !found {
        return Ok(false);
    }

    let Session { catalog, fetcher, .. } = session;
    let record = catalog.record_mut(name);
    let fetched = fetcher.fetch_source(name, record, dest_dir).await?;

    extract_build_scripts(name, &fetched.archive_path, extract_dir)
}
