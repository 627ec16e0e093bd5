//! Type definitions for parallel processing

use crate::config::ErrorStrategy;
use crate::partition::Chunk;
use crate::stats::ProcessingStats;

/// Configuration for parallel processing
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    pub num_workers: usize,
    pub on_error: ErrorStrategy,
    pub progress: bool,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get().max(1),
            on_error: ErrorStrategy::Abort,
            progress: false,
        }
    }
}

/// Work assigned to one worker: the chunk descriptor plus exclusive
/// ownership of that chunk's lines. No other worker can touch them.
#[derive(Debug)]
pub(crate) struct ChunkJob {
    pub chunk: Chunk,
    pub lines: Vec<String>,
}

/// The ordered output of one worker for its chunk.
///
/// `lines.len()` always equals the chunk's line count, whatever the error
/// strategy; the collector relies on this to reconstruct the input length.
#[derive(Debug)]
pub struct ChunkResult {
    pub index: usize,
    pub lines: Vec<String>,
    pub stats: ProcessingStats,
}
