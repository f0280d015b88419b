//! CLI argument definitions for the draft overlay tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

pub const DEFAULT_INPUT: &str = "data.csv";
pub const DEFAULT_OUTPUT: &str = "canada_draft_immigration_overlay.png";

#[derive(Parser)]
#[command(
    name = "draft-overlay",
    version,
    about = "Overlay Canadian migration against U.S. draft inductions",
    long_about = "Aggregate Statistics Canada immigration and emigration counts, \
                  merge them with U.S. Selective Service induction totals, and report \
                  Pearson correlations for the Korean War and Vietnam War windows.\n\n\
                  Run without arguments to read data.csv and write \
                  canada_draft_immigration_overlay.png."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute correlations and render the overlay chart (default).
    Overlay(OverlayArgs),

    /// Print the U.S. draft induction table.
    Draft,
}

#[derive(Args, Clone)]
pub struct OverlayArgs {
    /// Statistics Canada components of population growth CSV.
    #[arg(long = "input", value_name = "PATH", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Chart output path. The SVG variant uses the same stem with `.svg`.
    #[arg(long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Raster resolution in dots per inch.
    #[arg(
        long = "dpi",
        default_value_t = mig_report::DEFAULT_DPI,
        value_parser = clap::value_parser!(u32).range(10..=1200)
    )]
    pub dpi: u32,

    /// Chart format(s) to write.
    #[arg(long = "format", value_enum, default_value = "png")]
    pub format: ChartFormatArg,

    /// Extra font file for chart text (loaded before system fonts).
    #[arg(long = "font", value_name = "PATH")]
    pub fonts: Vec<PathBuf>,

    /// Also write merged rows and correlations as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Compute and print correlations without writing any files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Also print row counts and the merged-table summary.
    #[arg(long = "summary")]
    pub summary: bool,
}

impl Default for OverlayArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            dpi: mig_report::DEFAULT_DPI,
            format: ChartFormatArg::Png,
            fonts: Vec::new(),
            report_json: None,
            dry_run: false,
            summary: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartFormatArg {
    Png,
    Svg,
    Both,
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
