//! Repack command - filter an archive's Python sources into a tar.xz

use anyhow::{Context, Result};

use gleaner_archive::repack_sources;

use crate::cli::RepackArgs;
use crate::output;

pub fn run(args: RepackArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => args
            .archive
            .file_name()
            .map(|file| file.trim_end_matches(".tar.gz").to_string())
            .context("cannot derive a package name from the archive path")?,
    };

    let summary = repack_sources(args.archive.as_std_path(), args.output.as_std_path(), &name)?;

    output::success(&format!(
        "Repackaged {} source members into {}",
        summary.member_count,
        summary.output_path.display()
    ));
    Ok(())
}
