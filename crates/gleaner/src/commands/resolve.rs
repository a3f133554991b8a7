//! Resolve command - source-archive link resolution

use anyhow::{Context, Result};

use gleaner_core::DataDir;
use gleaner_curate::{resolve_all_links, Session};

use crate::cli::ResolveArgs;
use crate::output;

pub async fn run(args: ResolveArgs, layout: DataDir) -> Result<()> {
    let mut session = Session::connect(layout).await?;

    if args.all {
        let resolved = resolve_all_links(&mut session).await?;
        output::success(&format!("Resolved {resolved} new source links"));
        return Ok(());
    }

    let name = args.name.context("package name required")?;
    let found = session
        .client
        .resolve_link(&mut session.catalog, &name)
        .await
        .with_context(|| format!("failed to resolve {name}"))?;

    if !found {
        output::warning(&format!("{name} publishes no source archive"));
        return Ok(());
    }

    session.catalog.save()?;
    let record = session
        .catalog
        .record(&name)
        .context("record missing after resolve")?;
    output::success(&format!("Resolved {name}"));
    if let Some(link) = &record.source_link {
        output::kv("link", link);
    }
    if let Some(digest) = &record.digest {
        output::kv("digest", digest);
    }
    Ok(())
}
