// CLI-specific types and structures
// This module contains the command-line interface definitions and parsing logic

use clap::Parser;

use crate::config::{ColorMode, ErrorStrategy, TransformKind};

// CLI structure - contains all command-line arguments and options
#[derive(Parser, Debug)]
#[command(name = "linefork")]
#[command(about = "Fork-join text processor: partitions input lines across worker threads")]
#[command(
    long_about = "Fork-join text processor\n\nReads a newline-delimited text file, splits the lines into one contiguous\nchunk per worker thread, applies a per-line transform in parallel, and\nreassembles the results in original input order.\n\nCOMMON EXAMPLES:\n  linefork data.txt\n  linefork data.txt --all --transform upper\n  linefork access.log.gz --threads 4 --marker 'seen: ' --stats\n  cat data.txt | linefork --keep-lines 'ERROR'"
)]
#[command(version)]
pub struct Cli {
    /// Input file (stdin if not specified, or use "-" to explicitly specify stdin)
    pub file: Option<String>,

    /// Keep only input lines matching this regex pattern (applied before ignore-lines)
    #[arg(long = "keep-lines", help_heading = "Input Options")]
    pub keep_lines: Option<String>,

    /// Ignore input lines matching this regex pattern
    #[arg(long = "ignore-lines", help_heading = "Input Options")]
    pub ignore_lines: Option<String>,

    /// Per-line transform applied by the workers
    #[arg(
        short = 't',
        long = "transform",
        value_enum,
        default_value = "prefix",
        help_heading = "Processing Options"
    )]
    pub transform: TransformKind,

    /// Marker string prepended by the prefix transform
    #[arg(
        long = "marker",
        default_value = "Processed: ",
        help_heading = "Processing Options"
    )]
    pub marker: String,

    /// What to do when the transform fails on a line
    #[arg(
        long = "on-error",
        value_enum,
        default_value = "abort",
        help_heading = "Processing Options"
    )]
    pub on_error: ErrorStrategy,

    /// Emit a per-line progress message to stderr while processing
    #[arg(long = "progress", help_heading = "Processing Options")]
    pub progress: bool,

    /// Number of worker threads (0 = one per CPU core)
    #[arg(
        short = 'w',
        long = "threads",
        default_value = "0",
        help_heading = "Processing Options"
    )]
    pub threads: usize,

    /// Number of result lines to show (ignored with --all)
    #[arg(
        short = 'n',
        long = "take",
        default_value = "10",
        help_heading = "Output Options"
    )]
    pub take: usize,

    /// Print the whole result instead of a bounded preview
    #[arg(short = 'a', long = "all", help_heading = "Output Options")]
    pub all: bool,

    /// Suppress the summary line on stderr
    #[arg(short = 'q', long = "quiet", help_heading = "Output Options")]
    pub quiet: bool,

    /// Print detailed processing statistics to stderr
    #[arg(long = "stats", conflicts_with = "quiet", help_heading = "Output Options")]
    pub stats: bool,

    /// Color output mode for stderr messages
    #[arg(
        long = "color",
        value_enum,
        default_value = "auto",
        help_heading = "Output Options"
    )]
    pub color: ColorMode,
}
