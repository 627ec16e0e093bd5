//! Parallel processing module for linefork
//!
//! Implements the fork-join pipeline: the input line sequence is partitioned
//! into one chunk per worker, every worker transforms its chunk on its own
//! thread, and the collector reassembles the chunk results in chunk-index
//! order once all workers have finished.
//!
//! # Module Structure
//!
//! - `types`: Data structures for chunk jobs, chunk results, and configuration
//! - `worker`: Per-chunk transform loop run on each worker thread
//! - `collector`: Ordered merge of chunk results into the final sequence
//! - `processor`: Main ParallelProcessor orchestration

mod collector;
mod processor;
mod types;
mod worker;

// Re-export public types
pub use processor::ParallelProcessor;
pub use types::ParallelConfig;
