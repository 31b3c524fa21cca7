//! CLI argument definitions for the faculty tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "faculty",
    version,
    about = "Conference faculty ingestion - CV sections, program schedules, roster linking",
    long_about = "Turn conference material into structured records.\n\n\
                  Splits CVs into biography sections, extracts program schedules from\n\
                  PDF text dumps, and links names to a faculty roster."
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

    /// Allow person names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// JSON rules file overriding the built-in heuristics.
    #[arg(long = "rules", value_name = "FILE", global = true)]
    pub rules: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a CV text file into biography sections.
    Sections(SectionsArgs),

    /// Extract program entries from a schedule text dump.
    Schedule(ScheduleArgs),

    /// Rank roster entries against a free-text query.
    Search(SearchArgs),

    /// Link CV and photo files in a folder to roster entries by file name.
    Link(LinkArgs),

    /// Resolve the speakers of every program entry against the roster.
    Speakers(SpeakersArgs),

    /// List the session kinds the extractor assigns.
    Kinds,
}

#[derive(Args)]
pub struct SectionsArgs {
    /// CV text file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ScheduleArgs {
    /// Program text dump with `--- Page N ---` markers.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Faculty roster CSV.
    #[arg(long, value_name = "CSV")]
    pub roster: PathBuf,

    /// Free-text query (name, institution or qualification).
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum number of results.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct LinkArgs {
    /// Faculty roster CSV.
    #[arg(long, value_name = "CSV")]
    pub roster: PathBuf,

    /// Folder of CV and photo uploads.
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Closest-name hints shown for unmatched files.
    #[arg(long, default_value_t = 3)]
    pub suggestions: usize,

    /// Grade links with the strict thresholds (high 100, medium 75, low 50)
    /// instead of the rules file ones.
    #[arg(long)]
    pub strict: bool,

    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct SpeakersArgs {
    /// Faculty roster CSV.
    #[arg(long, value_name = "CSV")]
    pub roster: PathBuf,

    /// Program text dump.
    #[arg(value_name = "SCHEDULE_FILE")]
    pub file: PathBuf,

    #[arg(long)]
    pub json: bool,
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
