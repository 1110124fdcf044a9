use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

/// Broadband coverage analysis CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "openbroadband", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Analysis config file (JSON); built-in defaults otherwise
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the statistics panel for a data directory
    Stats(StatsArgs),

    /// List counties, sorted by name
    Counties(CountiesArgs),

    /// Export tabular data, enriched GeoJSON or a text report (forbids stdout)
    Export(ExportArgs),
}

/// Data directory and the session controls applied before a command runs.
#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Directory holding the geometry and metric payloads
    #[arg(value_hint = ValueHint::DirPath)]
    pub data: PathBuf,

    /// Speed threshold in Mbps, clamped to 1..=100
    #[arg(short, long, allow_negative_numbers = true)]
    pub threshold: Option<i64>,

    /// Focus county, by name
    #[arg(long)]
    pub county: Option<String>,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Print the report snapshot as JSON instead of the panel
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CountiesArgs {
    /// Directory holding the geometry and metric payloads
    #[arg(value_hint = ValueHint::DirPath)]
    pub data: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Metric records, every field quoted
    Csv,
    /// Enriched tracts with fill colours and the underserved flag
    Geojson,
    /// Speed-test tiles flagged against the high-speed cutoff
    Tiles,
    /// Plain-text report with key statistics and executive summary
    Report,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// What to export
    #[arg(short, long, value_enum)]
    pub format: ExportFormat,

    /// Output file; defaults to the dated export name in the current directory
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,
}
