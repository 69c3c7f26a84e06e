//! Site error types.

use lgdocs_nav::NavigationError;
use lgdocs_pages::RenderError;

/// Error raised while assembling or building a site.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Invalid navigation tree or unresolved link.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    /// Page rendering or document resolution failure.
    #[error(transparent)]
    Render(#[from] RenderError),
    /// I/O error writing build output.
    #[error("I/O error writing {}: {source}", .path.display())]
    Write {
        /// File being written.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
