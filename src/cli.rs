use clap::Parser;
use std::path::PathBuf;

/// Merge an accumulated CSV with a fresh export, rewriting only the last N days.
///
/// Rows dated before the cutoff (today minus --keep-days) are kept from --old
/// verbatim; rows at or after the cutoff come from --new, one row per date with
/// the later occurrence winning. The result is sorted ascending by date and
/// written to --out.
#[derive(Debug, Parser)]
#[command(name = "csvmerge", version)]
pub(crate) struct Cli {
    /// Existing accumulated CSV (missing or empty file means no history yet)
    #[arg(long)]
    pub old: Option<PathBuf>,

    /// Fresh export CSV
    #[arg(long)]
    pub new: PathBuf,

    /// Output CSV path, overwritten if present
    #[arg(long)]
    pub out: PathBuf,

    /// How many trailing days the new export is allowed to rewrite
    #[arg(long, default_value_t = 30)]
    pub keep_days: i64,

    /// Exact header name of the date column
    #[arg(long, default_value = "Date")]
    pub date_col: String,
}
