//! Metadata command - package metadata documents

use anyhow::{Context, Result};

use gleaner_core::{store, DataDir};
use gleaner_curate::{fetch_all_metadata, Session};

use crate::cli::MetadataArgs;
use crate::output;

pub async fn run(args: MetadataArgs, layout: DataDir) -> Result<()> {
    let out_dir = args
        .output
        .as_ref()
        .map(|path| path.as_std_path().to_path_buf())
        .unwrap_or_else(|| layout.metadata_dir());

    let mut session = Session::connect(layout).await?;

    if args.all {
        let written = fetch_all_metadata(&mut session, &out_dir).await?;
        output::success(&format!(
            "Wrote {written} metadata documents to {}",
            out_dir.display()
        ));
        return Ok(());
    }

    let name = args.name.context("package name required")?;
    let document = session
        .client
        .package_metadata(&name)
        .await
        .with_context(|| format!("failed to retrieve metadata for {name}"))?;

    if args.output.is_some() {
        let path = out_dir.join(format!("{name}.json"));
        store::write_json(&path, &document)?;
        output::success(&format!("Wrote {}", path.display()));
    } else {
        println!("{}", serde_json::to_string_pretty(&document)?);
    }
    Ok(())
}
