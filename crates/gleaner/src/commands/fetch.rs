//! Fetch command - source-archive downloads

use anyhow::{Context, Result};

use gleaner_core::DataDir;
use gleaner_curate::{fetch_all_sources, Session};

use crate::cli::FetchArgs;
use crate::output;

pub async fn run(args: FetchArgs, layout: DataDir) -> Result<()> {
    let dest = args
        .dest
        .as_ref()
        .map(|path| path.as_std_path().to_path_buf())
        .unwrap_or_else(|| layout.downloads_dir());

    let mut session = Session::connect(layout).await?;

    if args.all {
        let fetched = fetch_all_sources(&mut session, &dest).await?;
        output::success(&format!("Fetched {fetched} archives into {}", dest.display()));
        return Ok(());
    }

    let name = args.name.context("package name required")?;
    let fetched = session
        .fetcher
        .fetch_source(&name, session.catalog.record_mut(&name), &dest)
        .await
        .with_context(|| format!("failed to fetch {name}; resolve its link first"))?;
    session.catalog.save()?;

    output::success(&format!("Fetched {name}"));
    output::kv("archive", &fetched.archive_path.display().to_string());
    output::kv("size", &fetched.size_bytes.to_string());
    output::kv("digest", &fetched.observed_digest);
    Ok(())
}
