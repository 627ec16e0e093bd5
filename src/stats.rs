use std::time::Duration;

/// Statistics collected during a pipeline run
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    pub lines_read: usize,
    pub lines_filtered: usize,
    pub lines_processed: usize,
    pub transform_errors: usize,
    pub workers: usize,
    pub processing_time: Duration,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one worker's counters into the run totals.
    pub fn merge_worker(&mut self, worker: &ProcessingStats) {
        self.lines_processed += worker.lines_processed;
        self.transform_errors += worker.transform_errors;
    }

    pub fn format_stats(&self) -> String {
        let mut output = format!(
            "Lines processed: {} total, {} output, {} filtered",
            self.lines_read, self.lines_processed, self.lines_filtered
        );

        if self.transform_errors > 0 {
            output.push_str(&format!(", {} errors", self.transform_errors));
        }

        output.push_str(&format!(" across {} workers", self.workers));

        let processing_time_ms = self.processing_time.as_millis();
        output.push_str(&format!(" in {}ms", processing_time_ms));

        if processing_time_ms > 0 && self.lines_processed > 0 {
            let lines_per_sec =
                (self.lines_processed as f64 * 1000.0) / processing_time_ms as f64;
            output.push_str(&format!(" ({:.0} lines/s)", lines_per_sec));
        }

        output
    }
}
