//! Catalog command - build or load the package catalog

use anyhow::Result;

use gleaner_core::DataDir;
use gleaner_curate::Session;

use crate::cli::CatalogArgs;
use crate::output;

pub async fn run(args: CatalogArgs, layout: DataDir) -> Result<()> {
    let session = Session::connect(layout).await?;
    let catalog = &session.catalog;

    if args.json {
        let summary = serde_json::json!({
            "packages": catalog.len(),
            "popular": catalog.popular_len(),
            "index_file": catalog.layout().index_file(),
            "popular_file": catalog.layout().popular_file(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    output::success(&format!(
        "Catalog ready: {} packages, {} popular",
        catalog.len(),
        catalog.popular_len()
    ));
    output::kv("index", &catalog.layout().index_file().display().to_string());
    output::kv(
        "popular",
        &catalog.layout().popular_file().display().to_string(),
    );
    Ok(())
}
