pub mod inspect;
pub mod sort;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fieldsort_model::{FieldKind, SortDirection};

#[derive(Debug, Parser)]
#[command(
    name = "fieldsortctl",
    version,
    about = "Sort JSON records by a field named at runtime"
)]
pub struct Cli {
    /// Config file (TOML or JSON); overrides FIELDSORT_CONFIG_PATH and
    /// FIELDSORT_CONFIG_JSON
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sort a JSON array of objects and print the result
    Sort(SortArgs),
    /// Show how a field resolves against the first record
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Field or key to sort by
    #[arg(long)]
    pub field: String,
    /// asc, ascending, desc or descending; defaults to the configured
    /// direction
    #[arg(long)]
    pub order: Option<SortDirection>,
    /// Declare the field kind (string, integer, float) instead of inferring
    /// it from the records
    #[arg(long)]
    pub kind: Option<FieldKind>,
    /// JSON file to read, or `-` for stdin
    #[arg(long, default_value = "-")]
    pub input: PathBuf,
    /// Pretty-print the sorted array
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Field or key to resolve
    #[arg(long)]
    pub field: String,
    /// JSON file to read, or `-` for stdin
    #[arg(long, default_value = "-")]
    pub input: PathBuf,
}
