//! Worker loop for parallel processing
//!
//! One worker runs per chunk, applying the injected transform to every line
//! in order. Workers share nothing but the diagnostic sink; chunk lines and
//! the chunk result are owned exclusively by the worker until it finishes.

use anyhow::Result;

use crate::config::ErrorStrategy;
use crate::diagnostics::DiagnosticSink;
use crate::stats::ProcessingStats;
use crate::transform::LineTransform;

use super::types::{ChunkJob, ChunkResult};

/// Transform every line of one chunk, preserving relative order.
///
/// Line numbers in diagnostics are 1-based positions in the original input,
/// derived from the chunk's start offset.
pub(crate) fn process_chunk(
    job: ChunkJob,
    transform: &LineTransform,
    on_error: &ErrorStrategy,
    progress: bool,
    sink: &DiagnosticSink,
) -> Result<ChunkResult> {
    let ChunkJob { chunk, lines } = job;
    debug_assert_eq!(lines.len(), chunk.len());

    let mut results = Vec::with_capacity(lines.len());
    let mut stats = ProcessingStats::new();

    for (offset, line) in lines.into_iter().enumerate() {
        let line_num = chunk.start + offset + 1;

        if progress {
            sink.writeln(&format!(
                "worker {}: processing line {}: {}",
                chunk.index, line_num, line
            ));
        }

        match transform(&line) {
            Ok(processed) => {
                results.push(processed);
                stats.lines_processed += 1;
            }
            Err(e) => match on_error {
                ErrorStrategy::Abort => {
                    return Err(e.context(format!("transform failed on line {}", line_num)));
                }
                ErrorStrategy::Skip => {
                    // Failed slot keeps the original line so sibling results
                    // and the final sequence length are unaffected
                    sink.writeln(&format!(
                        "warning: transform failed on line {}: {}",
                        line_num, e
                    ));
                    stats.transform_errors += 1;
                    results.push(line);
                }
            },
        }
    }

    debug_assert_eq!(results.len(), chunk.len());

    Ok(ChunkResult {
        index: chunk.index,
        lines: results,
        stats,
    })
}
