//! Render error types.

use std::path::PathBuf;

/// Error returned when a page or document cannot be produced.
///
/// Rendering failures are surfaced as-is; nothing retries or falls back.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template parse or render failure.
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
    /// No content file exists for a referenced document.
    #[error("Document '{id}' not found: expected {}", .expected.display())]
    DocumentNotFound {
        /// Document identifier.
        id: String,
        /// Path that was looked up (without the extension alternatives).
        expected: PathBuf,
    },
    /// More than one content file matches a document id.
    #[error("Document '{id}' is ambiguous: {} candidates ({})", .candidates.len(), display_paths(.candidates))]
    AmbiguousDocument {
        /// Document identifier.
        id: String,
        /// Matching files.
        candidates: Vec<PathBuf>,
    },
    /// I/O error reading content or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
