//! Reporting of the final sequence
//!
//! Consumes the fully reassembled output: prints a bounded prefix (or the
//! whole sequence with --all) to stdout and a timing summary to stderr.

use anyhow::Result;

use crate::config::OutputConfig;
use crate::platform::SafeStdout;
use crate::stats::ProcessingStats;

/// Print the requested slice of the final sequence to stdout and the run
/// summary to stderr.
pub fn print_report(
    final_sequence: &[String],
    stats: &ProcessingStats,
    config: &OutputConfig,
) -> Result<()> {
    let total = final_sequence.len();
    let shown = if config.all {
        total
    } else {
        config.take.min(total)
    };

    if !config.all && !config.quiet {
        eprintln!("Processed output (first {} of {} lines):", shown, total);
    }

    let mut stdout = SafeStdout::new();
    for line in &final_sequence[..shown] {
        stdout.writeln(line)?;
    }
    stdout.flush()?;

    if config.stats {
        eprintln!("{}", stats.format_stats());
    } else if !config.quiet {
        eprintln!(
            "Processed {} lines in {}ms",
            total,
            stats.processing_time.as_millis()
        );
    }

    Ok(())
}
