//! CLI argument definitions for `reel`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "reel",
    version,
    about = "Clean scraped movie tables and explore the result",
    long_about = "Clean a scraped movie CSV into a canonical table.\n\n\
                  Validates required columns, removes duplicates, normalizes runtimes,\n\
                  release dates and genre lists, then writes a fixed column order.\n\
                  The report, search and explode commands read the cleaned file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow movie titles and other row values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw movie CSV into the canonical table.
    Clean(CleanArgs),

    /// Print dashboard aggregations for a cleaned file.
    Report(ReportArgs),

    /// List movies of one genre released in one year.
    Search(SearchArgs),

    /// Write one row per (movie, genre) pair.
    Explode(ExplodeArgs),

    /// Show the effective schema configuration.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Raw CSV exported by the scraper.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination file (default: <INPUT stem>_clean.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// TOML file overriding the schema and date mode.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also accept text-month date layouts such as "July 18, 2008".
    #[arg(long = "lenient-dates")]
    pub lenient_dates: bool,

    /// Run every stage and report counts without writing the output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// A cleaned file plus the configuration it was written with.
#[derive(Args)]
pub struct CanonicalArgs {
    /// Cleaned CSV produced by `reel clean`.
    #[arg(value_name = "CLEAN_CSV")]
    pub path: PathBuf,

    /// TOML file with the schema the file was written with.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ReportArgs {
    #[command(flatten)]
    pub canonical: CanonicalArgs,

    /// Entries in the top- and bottom-rated lists.
    #[arg(long = "top", default_value_t = 10)]
    pub top: usize,

    /// Bins for the rating and runtime histograms.
    #[arg(long = "bins", default_value_t = 10)]
    pub bins: usize,

    /// Print the dashboard as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SearchArgs {
    #[command(flatten)]
    pub canonical: CanonicalArgs,

    /// Genre tag, matched exactly.
    #[arg(long = "genre")]
    pub genre: String,

    /// Release year.
    #[arg(long = "year")]
    pub year: i32,
}

#[derive(Parser)]
pub struct ExplodeArgs {
    #[command(flatten)]
    pub canonical: CanonicalArgs,

    /// Destination CSV.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// TOML file to show instead of the defaults.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
