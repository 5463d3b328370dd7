//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Debcat - convertible debenture catalog maintenance
#[derive(Parser)]
#[command(name = "debcat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML configuration file; flags below override its values
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path of the persisted JSON catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Discover new issues from the published listing and merge them
    /// into the catalog
    UpdateList(UpdateListArgs),

    /// Refresh catalog price fields from the quote source
    UpdateQuotes(UpdateQuotesArgs),

    /// Render the catalog as delimited valuation rows
    Export(ExportArgs),
}

/// Arguments for `update-list`.
#[derive(Args)]
pub struct UpdateListArgs {
    /// Location of the published listing text
    #[arg(long)]
    pub listing: Option<String>,
}

/// Arguments for `update-quotes`.
#[derive(Args)]
pub struct UpdateQuotesArgs {
    /// CSV quote snapshot to enrich from
    #[arg(long)]
    pub quotes: Option<PathBuf>,

    /// Seconds to wait between outbound quote requests
    #[arg(long)]
    pub pacing_secs: Option<u64>,
}

/// Arguments for `export`.
#[derive(Args)]
pub struct ExportArgs {
    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Evaluation date for derived metrics (YYYY-MM-DD); today when
    /// omitted
    #[arg(long)]
    pub as_of: Option<String>,
}
