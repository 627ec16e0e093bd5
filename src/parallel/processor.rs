//! Main parallel processor
//!
//! Contains the ParallelProcessor struct that orchestrates the fork-join
//! pipeline: partition, spawn one worker thread per chunk, join them all,
//! then merge deterministically by chunk index.

use anyhow::Result;
use crossbeam_channel::bounded;
use std::sync::Arc;
use std::thread;

use crate::diagnostics::DiagnosticSink;
use crate::partition::partition;
use crate::stats::ProcessingStats;
use crate::transform::LineTransform;

use super::collector::collect_ordered;
use super::types::{ChunkJob, ParallelConfig};
use super::worker::process_chunk;

/// Main parallel processor
pub struct ParallelProcessor {
    config: ParallelConfig,
}

impl ParallelProcessor {
    pub fn new(config: ParallelConfig) -> Self {
        Self { config }
    }

    /// Run the full partition/process/merge pipeline over `lines`.
    ///
    /// Workers are launched together and all joined before the merge; there
    /// is no cancellation. With the abort error strategy the first transform
    /// failure fails the run and any chunk results already delivered are
    /// discarded.
    pub fn process(
        &self,
        lines: Vec<String>,
        transform: LineTransform,
        sink: &DiagnosticSink,
    ) -> Result<(Vec<String>, ProcessingStats)> {
        let total = lines.len();
        let num_workers = self.config.num_workers.max(1);
        let chunks = partition(total, num_workers);

        // Hand each chunk exclusive ownership of its lines before any
        // thread starts. Splitting back to front keeps this allocation-free
        // apart from the per-chunk vectors themselves.
        let mut remaining = lines;
        let mut jobs: Vec<ChunkJob> = chunks
            .iter()
            .rev()
            .map(|chunk| ChunkJob {
                chunk: *chunk,
                lines: remaining.split_off(chunk.start),
            })
            .collect();
        jobs.reverse();
        debug_assert!(remaining.is_empty());

        // Each worker sends exactly one result, so a bound of num_workers
        // means no worker ever blocks on the channel
        let (result_sender, result_receiver) = bounded(num_workers);

        let mut handles = Vec::with_capacity(jobs.len());
        for job in jobs {
            let result_sender = result_sender.clone();
            let worker_transform = Arc::clone(&transform);
            let on_error = self.config.on_error.clone();
            let progress = self.config.progress;
            let worker_sink = sink.clone();

            handles.push(thread::spawn(move || -> Result<()> {
                let result =
                    process_chunk(job, &worker_transform, &on_error, progress, &worker_sink)?;
                // A dropped receiver means the run is already failing;
                // nothing left to report
                let _ = result_sender.send(result);
                Ok(())
            }));
        }
        drop(result_sender);

        // Fork-join: every worker runs to completion before the collector
        // touches a single result
        let mut first_error: Option<anyhow::Error> = None;
        for (idx, handle) in handles.into_iter().enumerate() {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
                Err(panic) => panic!("worker thread {} panicked: {:?}", idx, panic),
            }
        }
        if let Some(e) = first_error {
            return Err(e);
        }

        let (final_sequence, mut stats) = collect_ordered(result_receiver, num_workers, total)?;
        stats.workers = num_workers;
        Ok((final_sequence, stats))
    }
}
