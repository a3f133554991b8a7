//! Extract command - mine build scripts from a downloaded archive

use anyhow::{Context, Result};

use gleaner_archive::extract_build_scripts;
use gleaner_core::DataDir;
use gleaner_index::Catalog;

use crate::cli::ExtractArgs;
use crate::output;

pub fn run(args: ExtractArgs, layout: DataDir) -> Result<()> {
    let out_dir = args
        .output
        .as_ref()
        .map(|path| path.as_std_path().to_path_buf())
        .unwrap_or_else(|| layout.extracted_dir());

    let catalog = Catalog::load(layout)?;
    let record = catalog
        .record(&args.name)
        .with_context(|| format!("{} is not cataloged", args.name))?;
    let archive_path = record.archive_path.clone().with_context(|| {
        format!(
            "{name} has no downloaded archive; run `gleaner fetch {name}` first",
            name = args.name
        )
    })?;

    let found = extract_build_scripts(&args.name, &archive_path, &out_dir)?;
    if found {
        output::success(&format!(
            "Extracted build scripts into {}",
            out_dir.display()
        ));
    } else {
        output::warning(&format!("{} contains no build script", args.name));
    }
    Ok(())
}
