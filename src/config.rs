//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default location of the JSON inventory log.
pub const DEFAULT_LOG_FILE: &str = "inventory_log.json";

#[derive(Debug, Parser)]
#[command(
    version,
    name = "keyed_store",
    about = "Small record-keeping demos built on one generic keyed store"
)]
pub struct Cli {
    /// Tracing filter, e.g. `debug` or `keyed_store=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Electronics and grocery stock with add, restock and removal.
    Inventory,
    /// Patient registry and prescription lookup.
    Pharmacy,
    /// Build a grade report from an `id,name,score` file.
    Grades(GradesArgs),
    /// Apply a batch of deposits, withdrawals and transfers.
    Ledger,
    /// Edit an inventory persisted as JSON.
    InventoryLog(InventoryLogArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct GradesArgs {
    /// Input file, one `id,name,score` per line.
    #[arg(long, short)]
    pub input: PathBuf,
    /// Where to write the report. Printed only when absent.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct InventoryLogArgs {
    #[arg(long, short, default_value = DEFAULT_LOG_FILE)]
    pub file: PathBuf,
}
