use clap::ValueEnum;

/// Main configuration struct for linefork
#[derive(Debug, Clone)]
pub struct LineforkConfig {
    pub input: InputConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
    pub performance: PerformanceConfig,
}

/// Input configuration
#[derive(Debug, Clone)]
pub struct InputConfig {
    pub file: Option<String>,
    pub keep_lines: Option<String>,
    pub ignore_lines: Option<String>,
}

/// Processing configuration
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    pub transform: TransformKind,
    pub marker: String,
    pub on_error: ErrorStrategy,
    pub progress: bool,
}

/// Output configuration
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub take: usize,
    pub all: bool,
    pub quiet: bool,
    pub stats: bool,
    pub color: ColorMode,
}

/// Performance configuration
#[derive(Debug, Clone)]
pub struct PerformanceConfig {
    pub threads: usize,
}

/// Built-in per-line transform selection
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum TransformKind {
    #[default]
    Prefix,
    Upper,
    Lower,
}

/// Per-line transform failure strategy
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ErrorStrategy {
    /// First failing line aborts the whole run
    #[default]
    Abort,
    /// Failing lines keep their original text; the error is recorded
    Skip,
}

/// Color output mode
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl LineforkConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            input: InputConfig {
                file: cli.file.clone(),
                keep_lines: cli.keep_lines.clone(),
                ignore_lines: cli.ignore_lines.clone(),
            },
            processing: ProcessingConfig {
                transform: cli.transform.clone(),
                marker: cli.marker.clone(),
                on_error: cli.on_error.clone(),
                progress: cli.progress,
            },
            output: OutputConfig {
                take: cli.take,
                all: cli.all,
                quiet: cli.quiet,
                stats: cli.stats,
                color: cli.color.clone(),
            },
            performance: PerformanceConfig {
                threads: cli.threads,
            },
        }
    }

    /// Effective worker count: 0 means auto-detect, and anything below 1
    /// after detection is clamped to a single worker.
    pub fn effective_threads(&self) -> usize {
        if self.performance.threads == 0 {
            num_cpus::get().max(1)
        } else {
            self.performance.threads
        }
    }
}

impl Default for LineforkConfig {
    fn default() -> Self {
        Self {
            input: InputConfig {
                file: None,
                keep_lines: None,
                ignore_lines: None,
            },
            processing: ProcessingConfig {
                transform: TransformKind::Prefix,
                marker: "Processed: ".to_string(),
                on_error: ErrorStrategy::Abort,
                progress: false,
            },
            output: OutputConfig {
                take: 10,
                all: false,
                quiet: false,
                stats: false,
                color: ColorMode::Auto,
            },
            performance: PerformanceConfig { threads: 0 },
        }
    }
}

/// Prefix a message with the tool name, colored when the terminal supports it
pub fn format_error_message(message: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[31mlinefork:\x1b[0m {}", message)
    } else {
        format!("linefork: {}", message)
    }
}
