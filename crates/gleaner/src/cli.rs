//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Gleaner - catalog and harvest source archives from the package index
#[derive(Parser, Debug)]
#[command(name = "gleaner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Directory holding persisted catalog state
    #[arg(long, default_value = "data", global = true)]
    pub data_dir: Utf8PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build or load the package catalog
    Catalog(CatalogArgs),

    /// Resolve source-archive links
    Resolve(ResolveArgs),

    /// Retrieve package metadata documents
    Metadata(MetadataArgs),

    /// Download source archives
    Fetch(FetchArgs),

    /// Repackage an archive's Python sources into a tar.xz
    Repack(RepackArgs),

    /// Extract build scripts from a downloaded archive
    Extract(ExtractArgs),

    /// Sample uncommon packages and mine their build scripts
    Sample(SampleArgs),

    /// Check connectivity and persisted state health
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// Catalog command
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Package name
    #[arg(required_unless_present = "all")]
    pub name: Option<String>,

    /// Resolve every cataloged package lacking a link
    #[arg(long, conflicts_with = "name")]
    pub all: bool,
}

// Metadata command
#[derive(Args, Debug)]
pub struct MetadataArgs {
    /// Package name
    #[arg(required_unless_present = "all")]
    pub name: Option<String>,

    /// Retrieve metadata for every cataloged package
    #[arg(long, conflicts_with = "name")]
    pub all: bool,

    /// Directory receiving metadata documents (default: <data-dir>/metadata)
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

// Fetch command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Package name
    #[arg(required_unless_present = "all")]
    pub name: Option<String>,

    /// Fetch every package with a resolved link
    #[arg(long, conflicts_with = "name")]
    pub all: bool,

    /// Destination directory (default: <data-dir>/downloads)
    #[arg(short, long)]
    pub dest: Option<Utf8PathBuf>,
}

// Repack command
#[derive(Args, Debug)]
pub struct RepackArgs {
    /// Input archive (.tar.gz)
    pub archive: Utf8PathBuf,

    /// Package name used for the output file (default: derived from the
    /// archive filename)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: Utf8PathBuf,
}

// Extract command
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Package name (must have been fetched)
    pub name: String,

    /// Output directory (default: <data-dir>/extracted)
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

// Sample command
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Number of successful extractions to aim for
    #[arg(short, long, default_value = "100")]
    pub count: usize,

    /// Directory receiving downloaded archives (default: <data-dir>/downloads)
    #[arg(long)]
    pub dest: Option<Utf8PathBuf>,

    /// Directory receiving extracted build scripts (default: <data-dir>/extracted)
    #[arg(long)]
    pub extract_dir: Option<Utf8PathBuf>,
}

// Doctor command
#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
