//! Ordered merge of worker results
//!
//! Workers may finish in any order; the collector reorders by chunk index,
//! not by arrival, holding early arrivals in a pending map until every
//! preceding chunk has been appended.

use anyhow::{anyhow, Result};
use crossbeam_channel::Receiver;
use std::collections::HashMap;

use crate::stats::ProcessingStats;

use super::types::ChunkResult;

/// Drain the result channel and concatenate chunk results strictly in
/// chunk-index order (0, 1, ..., K-1).
///
/// Callers must only invoke this after all workers have been joined; a chunk
/// index that never arrives is a pipeline invariant violation, not a user
/// error.
pub(crate) fn collect_ordered(
    results: Receiver<ChunkResult>,
    expected_chunks: usize,
    total_lines: usize,
) -> Result<(Vec<String>, ProcessingStats)> {
    let mut final_sequence = Vec::with_capacity(total_lines);
    let mut stats = ProcessingStats::new();
    let mut pending: HashMap<usize, ChunkResult> = HashMap::new();
    let mut next_expected = 0usize;

    while let Ok(result) = results.recv() {
        stats.merge_worker(&result.stats);
        pending.insert(result.index, result);

        // Append all consecutive chunks starting from next_expected
        while let Some(ready) = pending.remove(&next_expected) {
            final_sequence.extend(ready.lines);
            next_expected += 1;
        }
    }

    if next_expected != expected_chunks {
        return Err(anyhow!(
            "internal error: merged {} of {} chunks, chunk {} never arrived",
            next_expected,
            expected_chunks,
            next_expected
        ));
    }
    debug_assert!(pending.is_empty());

    if final_sequence.len() != total_lines {
        return Err(anyhow!(
            "internal error: merged {} lines, expected {}",
            final_sequence.len(),
            total_lines
        ));
    }

    Ok((final_sequence, stats))
}
