//! Navigation error types.

use std::path::PathBuf;

/// Error raised while building or checking the navigation tree.
///
/// Every variant is fatal at build time and names the offending node.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    /// The same document is referenced by two nodes.
    #[error("Document '{id}' is referenced twice: at {first} and at {second}")]
    DuplicateDocument {
        /// Document identifier.
        id: String,
        /// Location of the first reference.
        first: String,
        /// Location of the repeated reference.
        second: String,
    },
    /// A category has an empty or whitespace-only label.
    #[error("Category at {location} has an empty label")]
    EmptyLabel {
        /// Location of the category.
        location: String,
    },
    /// A category has no children.
    #[error("Category '{label}' at {location} has no items")]
    EmptyCategory {
        /// Category label.
        label: String,
        /// Location of the category.
        location: String,
    },
    /// A document identifier cannot be turned into a route.
    #[error("Invalid document id '{id}' at {location}: {reason}")]
    InvalidDocumentId {
        /// Offending identifier.
        id: String,
        /// Location of the reference.
        location: String,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// A declared sidebar has no items.
    #[error("Sidebar '{0}' has no items")]
    EmptySidebar(String),
    /// An internal link does not resolve to any emitted route.
    #[error("Broken link: {location} points to '{target}', which is not a document or page route")]
    UnresolvedLink {
        /// Where the link is declared (e.g. "navbar item 'Docs'").
        location: String,
        /// Route the link points to.
        target: String,
    },
    /// Two emitted routes collide.
    #[error("Route '{route}' is emitted by both {first} and {second}")]
    DuplicateRoute {
        /// Colliding route.
        route: String,
        /// First owner of the route.
        first: String,
        /// Second owner of the route.
        second: String,
    },
    /// Sidebars file not found.
    #[error("Sidebars file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error reading the sidebars file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("Sidebars parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
