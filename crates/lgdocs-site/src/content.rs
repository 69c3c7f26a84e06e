//! Content document lookup.
//!
//! Documents are referenced by id only. Their format belongs to the external
//! renderer; the build just needs to know that each id maps to exactly one
//! source file.

use std::path::{Path, PathBuf};

use lgdocs_pages::RenderError;

/// Recognized content file extensions, in lookup order.
const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Resolves document ids to source files.
pub trait ContentSource {
    /// Source file of a document, relative to the content root.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::DocumentNotFound` when nothing matches and
    /// `RenderError::AmbiguousDocument` when more than one file does.
    fn resolve(&self, document_id: &str) -> Result<PathBuf, RenderError>;
}

/// Filesystem content directory.
///
/// `sdks/nim-sdk` resolves to `sdks/nim-sdk.md` or `sdks/nim-sdk.mdx`.
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FsContentSource {
    fn resolve(&self, document_id: &str) -> Result<PathBuf, RenderError> {
        let mut candidates: Vec<PathBuf> = CONTENT_EXTENSIONS
            .iter()
            .map(|ext| PathBuf::from(format!("{document_id}.{ext}")))
            .filter(|relative| self.root.join(relative).is_file())
            .collect();

        if candidates.len() > 1 {
            return Err(RenderError::AmbiguousDocument {
                id: document_id.to_owned(),
                candidates: candidates.iter().map(|c| self.root.join(c)).collect(),
            });
        }
        candidates.pop().ok_or_else(|| RenderError::DocumentNotFound {
            id: document_id.to_owned(),
            expected: self.root.join(format!("{document_id}.md")),
        })
    }
}
