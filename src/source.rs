//! Line source: loads the whole input into memory before partitioning
//!
//! Produces the ordered sequence of raw text lines the pipeline operates on.
//! Lines are never parsed into fields; the only pre-partition processing is
//! the optional keep/ignore regex filters.

use anyhow::{Context, Result};
use regex::Regex;
use std::io::{self, BufRead};

use crate::config::InputConfig;
use crate::decompression;

/// The loaded input plus source-side counters.
#[derive(Debug)]
pub struct SourceLines {
    pub lines: Vec<String>,
    pub lines_read: usize,
    pub lines_filtered: usize,
}

/// Read every line of the configured input into memory.
///
/// A missing or unreadable input is fatal and reported once, before any
/// processing is attempted. An empty input is not an error.
pub fn read_lines(config: &InputConfig) -> Result<SourceLines> {
    let keep_lines = compile_filter(config.keep_lines.as_deref(), "--keep-lines")?;
    let ignore_lines = compile_filter(config.ignore_lines.as_deref(), "--ignore-lines")?;

    let reader: Box<dyn BufRead> = match config.file.as_deref() {
        None | Some("-") => decompression::maybe_decompress(io::stdin())
            .context("cannot read from stdin")?,
        Some(path) => decompression::open_path(path)?,
    };

    let mut lines = Vec::new();
    let mut lines_read = 0usize;
    let mut lines_filtered = 0usize;

    for line in reader.lines() {
        let mut line = line.context("failed to read input")?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines_read += 1;

        if let Some(keep) = &keep_lines {
            if !keep.is_match(&line) {
                lines_filtered += 1;
                continue;
            }
        }
        if let Some(ignore) = &ignore_lines {
            if ignore.is_match(&line) {
                lines_filtered += 1;
                continue;
            }
        }

        lines.push(line);
    }

    Ok(SourceLines {
        lines,
        lines_read,
        lines_filtered,
    })
}

fn compile_filter(pattern: Option<&str>, flag: &str) -> Result<Option<Regex>> {
    match pattern {
        None => Ok(None),
        Some(pattern) => Regex::new(pattern)
            .map(Some)
            .with_context(|| format!("invalid {} pattern '{}'", flag, pattern)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn input_for(temp_file: &NamedTempFile) -> InputConfig {
        InputConfig {
            file: Some(temp_file.path().to_string_lossy().to_string()),
            keep_lines: None,
            ignore_lines: None,
        }
    }

    #[test]
    fn test_reads_lines_in_order() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "a\nb\nc\n")?;
        temp_file.flush()?;

        let source = read_lines(&input_for(&temp_file))?;
        assert_eq!(source.lines, vec!["a", "b", "c"]);
        assert_eq!(source.lines_read, 3);
        assert_eq!(source.lines_filtered, 0);
        Ok(())
    }

    #[test]
    fn test_empty_file_is_not_an_error() -> Result<()> {
        let temp_file = NamedTempFile::new()?;
        let source = read_lines(&input_for(&temp_file))?;
        assert!(source.lines.is_empty());
        assert_eq!(source.lines_read, 0);
        Ok(())
    }

    #[test]
    fn test_trailing_carriage_returns_are_stripped() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "a\r\nb\r\n")?;
        temp_file.flush()?;

        let source = read_lines(&input_for(&temp_file))?;
        assert_eq!(source.lines, vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn test_keep_and_ignore_filters() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "keep one\nkeep two skipme\ndrop three\n")?;
        temp_file.flush()?;

        let mut config = input_for(&temp_file);
        config.keep_lines = Some("^keep".to_string());
        config.ignore_lines = Some("skipme".to_string());

        let source = read_lines(&config)?;
        assert_eq!(source.lines, vec!["keep one"]);
        assert_eq!(source.lines_read, 3);
        assert_eq!(source.lines_filtered, 2);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let config = InputConfig {
            file: Some("/definitely/not/here.txt".to_string()),
            keep_lines: None,
            ignore_lines: None,
        };
        let err = read_lines(&config).unwrap_err();
        assert!(err.to_string().contains("cannot open input file"));
    }

    #[test]
    fn test_bad_filter_pattern_is_fatal() {
        let config = InputConfig {
            file: None,
            keep_lines: Some("(".to_string()),
            ignore_lines: None,
        };
        let err = read_lines(&config).unwrap_err();
        assert!(err.to_string().contains("--keep-lines"));
    }
}
