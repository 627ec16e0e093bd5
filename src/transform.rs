//! Built-in per-line transforms
//!
//! The pipeline core takes an injected transform function and never hardcodes
//! transformation logic; this module only supplies the built-ins the CLI can
//! select from.

use anyhow::Result;
use std::sync::Arc;

use crate::config::TransformKind;

/// The pluggable per-line transformation applied by every worker.
///
/// The function must be pure with respect to result data: it receives one
/// line and returns the processed line (or an error, handled according to
/// the configured error strategy).
pub type LineTransform = Arc<dyn Fn(&str) -> Result<String> + Send + Sync>;

/// Prefix every line with a fixed marker string.
pub fn marker_prefix(marker: String) -> LineTransform {
    Arc::new(move |line| Ok(format!("{}{}", marker, line)))
}

/// Uppercase every line.
pub fn uppercase() -> LineTransform {
    Arc::new(|line| Ok(line.to_uppercase()))
}

/// Lowercase every line.
pub fn lowercase() -> LineTransform {
    Arc::new(|line| Ok(line.to_lowercase()))
}

/// Build the transform selected by the configuration.
pub fn build_transform(kind: &TransformKind, marker: &str) -> LineTransform {
    match kind {
        TransformKind::Prefix => marker_prefix(marker.to_string()),
        TransformKind::Upper => uppercase(),
        TransformKind::Lower => lowercase(),
    }
}
