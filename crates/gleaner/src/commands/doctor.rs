//! Doctor command - check connectivity and persisted state health
//!
//! Runs the same probes a session would, plus strict-mode reads of the
//! persisted files so corruption that tolerant loading would paper over
//! gets reported.

use anyhow::Result;
use serde::Serialize;

use gleaner_core::{net, store, DataDir};
use gleaner_index::PackageIndex;

use crate::cli::DoctorArgs;
use crate::output;

#[derive(Debug, Serialize)]
struct Check {
    name: &'static str,
    ok: bool,
    detail: String,
}

pub async fn run(args: DoctorArgs, layout: DataDir) -> Result<()> {
    let mut checks = Vec::new();

    checks.push(match net::ensure_online().await {
        Ok(()) => Check {
            name: "connectivity",
            ok: true,
            detail: "outbound network reachable".to_string(),
        },
        Err(err) => Check {
            name: "connectivity",
            ok: false,
            detail: err.to_string(),
        },
    });

    let index_file = layout.index_file();
    checks.push(if !index_file.exists() {
        Check {
            name: "package index",
            ok: true,
            detail: "not created yet (first run)".to_string(),
        }
    } else {
        match store::read_json::<PackageIndex>(&index_file, true) {
            Ok(index) => Check {
                name: "package index",
                ok: true,
                detail: format!("{} packages", index.len()),
            },
            Err(err) => Check {
                name: "package index",
                ok: false,
                detail: err.to_string(),
            },
        }
    });

    let popular_file = layout.popular_file();
    checks.push(if !popular_file.exists() {
        Check {
            name: "popularity list",
            ok: true,
            detail: "not created yet (first run)".to_string(),
        }
    } else {
        match store::read_json::<Vec<String>>(&popular_file, true) {
            Ok(list) => Check {
                name: "popularity list",
                ok: true,
                detail: format!("{} popular packages", list.len()),
            },
            Err(err) => Check {
                name: "popularity list",
                ok: false,
                detail: err.to_string(),
            },
        }
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
    } else {
        for check in &checks {
            if check.ok {
                output::success(&format!("{}: {}", check.name, check.detail));
            } else {
                output::error(&format!("{}: {}", check.name, check.detail));
            }
        }
    }

    if checks.iter().any(|check| !check.ok) {
        anyhow::bail!("doctor found problems");
    }
    Ok(())
}
