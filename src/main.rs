use anyhow::Result;
use clap::Parser;
use std::time::Instant;

mod cli;
mod config;
mod decompression;
mod diagnostics;
mod parallel;
mod partition;
mod platform;
mod report;
mod source;
mod stats;
mod transform;
mod tty;

use cli::Cli;
use config::LineforkConfig;
use diagnostics::DiagnosticSink;
use parallel::{ParallelConfig, ParallelProcessor};
use platform::ExitCode;

fn main() {
    let cli = Cli::parse();
    let config = LineforkConfig::from_cli(&cli);
    let use_color = tty::should_use_colors_with_mode(&config.output.color);

    if let Err(e) = run(&config) {
        eprintln!("{}", config::format_error_message(&format!("{:#}", e), use_color));
        ExitCode::GeneralError.exit();
    }
}

fn run(config: &LineforkConfig) -> Result<()> {
    let started = Instant::now();

    let source = source::read_lines(&config.input)?;

    let transform =
        transform::build_transform(&config.processing.transform, &config.processing.marker);
    let sink = DiagnosticSink::stderr();

    let processor = ParallelProcessor::new(ParallelConfig {
        num_workers: config.effective_threads(),
        on_error: config.processing.on_error.clone(),
        progress: config.processing.progress,
    });

    let (final_sequence, mut stats) = processor.process(source.lines, transform, &sink)?;

    stats.lines_read = source.lines_read;
    stats.lines_filtered = source.lines_filtered;
    stats.processing_time = started.elapsed();

    report::print_report(&final_sequence, &stats, &config.output)
}
