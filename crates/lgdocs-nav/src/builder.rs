//! Validating tree construction.

use std::collections::HashMap;

use crate::NavigationError;
use crate::declaration::{SidebarEntry, SidebarItem};
use crate::node::{Category, DocumentReference, NavigationNode};

/// Build a navigation forest from a declaration.
///
/// Validates that no document id appears twice, that every category has a
/// non-empty label and at least one child, and that document ids are usable
/// as routes. The first violation stops the build.
///
/// # Errors
///
/// Returns the [`NavigationError`] for the first offending node.
///
/// # Example
///
/// ```
/// use lgdocs_nav::{SidebarItem, build_tree};
///
/// let declaration = vec![SidebarItem::category(
///     "SDKs",
///     vec![
///         SidebarItem::doc("javascript-sdk"),
///         SidebarItem::doc("nim-sdk"),
///         SidebarItem::doc("cpp-sdk"),
///     ],
/// )];
///
/// let tree = build_tree(&declaration).unwrap();
/// assert_eq!(tree.len(), 1);
/// let sdks = tree[0].as_category().unwrap();
/// assert_eq!(sdks.children().len(), 3);
/// ```
pub fn build_tree(declaration: &[SidebarItem]) -> Result<Vec<NavigationNode>, NavigationError> {
    TreeBuilder::new().build_sidebar("sidebar", declaration)
}

/// Walks declarations while tracking every document id seen so far.
///
/// One builder is shared across all sidebars of a declaration so uniqueness
/// holds for the whole tree version.
pub(crate) struct TreeBuilder {
    seen: HashMap<String, String>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            seen: HashMap::new(),
        }
    }

    pub(crate) fn build_sidebar(
        &mut self,
        name: &str,
        items: &[SidebarItem],
    ) -> Result<Vec<NavigationNode>, NavigationError> {
        tracing::debug!(sidebar = name, items = items.len(), "Building sidebar");
        self.build_items(name, items)
    }

    fn build_items(
        &mut self,
        parent: &str,
        items: &[SidebarItem],
    ) -> Result<Vec<NavigationNode>, NavigationError> {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.build_item(&format!("{parent}[{i}]"), item))
            .collect()
    }

    fn build_item(
        &mut self,
        location: &str,
        item: &SidebarItem,
    ) -> Result<NavigationNode, NavigationError> {
        match item {
            SidebarItem::Doc(id) | SidebarItem::Entry(SidebarEntry::Doc { id }) => {
                self.build_document(location, id)
            }
            SidebarItem::Entry(SidebarEntry::Category {
                label,
                collapsible,
                collapsed,
                items,
            }) => {
                if label.trim().is_empty() {
                    return Err(NavigationError::EmptyLabel {
                        location: location.to_owned(),
                    });
                }
                if items.is_empty() {
                    return Err(NavigationError::EmptyCategory {
                        label: label.clone(),
                        location: location.to_owned(),
                    });
                }
                let children = self.build_items(&format!("{location}.items"), items)?;
                Ok(NavigationNode::Category(Category::new(
                    label.clone(),
                    *collapsible,
                    *collapsed,
                    children,
                )))
            }
        }
    }

    fn build_document(&mut self, location: &str, id: &str) -> Result<NavigationNode, NavigationError> {
        if let Some(reason) = invalid_id_reason(id) {
            return Err(NavigationError::InvalidDocumentId {
                id: id.to_owned(),
                location: location.to_owned(),
                reason,
            });
        }
        if let Some(first) = self.seen.get(id) {
            return Err(NavigationError::DuplicateDocument {
                id: id.to_owned(),
                first: first.clone(),
                second: location.to_owned(),
            });
        }
        self.seen.insert(id.to_owned(), location.to_owned());
        Ok(NavigationNode::Document(DocumentReference::new(id.to_owned())))
    }
}

/// Why a document id cannot be used as a route, if it can't.
fn invalid_id_reason(id: &str) -> Option<&'static str> {
    if id.is_empty() {
        Some("id cannot be empty")
    } else if id.chars().any(char::is_whitespace) {
        Some("id cannot contain whitespace")
    } else if id.contains(['#', '?', '\\']) {
        Some("id cannot contain '#', '?' or '\\'")
    } else if id.starts_with('/') || id.ends_with('/') {
        Some("id cannot start or end with '/'")
    } else if id.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..") {
        Some("id cannot contain empty, '.' or '..' segments")
    } else {
        None
    }
}
