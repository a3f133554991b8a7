//! Sample command - mine build scripts from random uncommon packages

use anyhow::Result;

use gleaner_core::DataDir;
use gleaner_curate::{sample_uncommon, Session};

use crate::cli::SampleArgs;
use crate::output;

pub async fn run(args: SampleArgs, layout: DataDir) -> Result<()> {
    let dest = args
        .dest
        .as_ref()
        .map(|path| path.as_std_path().to_path_buf())
        .unwrap_or_else(|| layout.downloads_dir());
    let extract_dir = args
        .extract_dir
        .as_ref()
        .map(|path| path.as_std_path().to_path_buf())
        .unwrap_or_else(|| layout.extracted_dir());

    let mut session = Session::connect(layout).await?;
    let report = sample_uncommon(&mut session, &extract_dir, &dest, args.count).await?;

    output::success(&format!(
        "Visited {} packages, {} yielded build scripts",
        report.visited, report.extracted
    ));
    if report.extracted < args.count {
        output::warning("candidate pool exhausted before reaching the target");
    }
    Ok(())
}
