//! Validated navigation nodes.
//!
//! Nodes can only be created by the tree builder, so any [`NavigationNode`]
//! in hand satisfies the tree invariants: categories have a non-empty label
//! and at least one child, and document ids are well-formed.

use serde::Serialize;

/// One entry in a sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavigationNode {
    /// Labelled group of nodes.
    Category(Category),
    /// Reference to a content document.
    #[serde(rename = "doc")]
    Document(DocumentReference),
}

impl NavigationNode {
    /// Category payload, if this node is a category.
    #[must_use]
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Self::Category(category) => Some(category),
            Self::Document(_) => None,
        }
    }

    /// Document id, if this node is a document reference.
    #[must_use]
    pub fn document_id(&self) -> Option<&str> {
        match self {
            Self::Document(doc) => Some(doc.id()),
            Self::Category(_) => None,
        }
    }
}

/// Labelled group of nodes. Children are rendered top-to-bottom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    label: String,
    collapsible: bool,
    collapsed: bool,
    #[serde(rename = "items")]
    children: Vec<NavigationNode>,
}

impl Category {
    pub(crate) fn new(
        label: String,
        collapsible: bool,
        collapsed: bool,
        children: Vec<NavigationNode>,
    ) -> Self {
        Self {
            label,
            collapsible,
            collapsed: collapsible && collapsed,
            children,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn collapsible(&self) -> bool {
        self.collapsible
    }

    /// Whether the category starts collapsed. Always false when not collapsible.
    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Never empty.
    #[must_use]
    pub fn children(&self) -> &[NavigationNode] {
        &self.children
    }
}

/// Reference to a content document by id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocumentReference {
    id: String,
}

impl DocumentReference {
    pub(crate) fn new(id: String) -> Self {
        Self { id }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Collect document ids of a forest in depth-first, top-to-bottom order.
pub(crate) fn collect_document_ids<'a>(nodes: &'a [NavigationNode], out: &mut Vec<&'a str>) {
    for node in nodes {
        match node {
            NavigationNode::Document(doc) => out.push(doc.id()),
            NavigationNode::Category(category) => collect_document_ids(category.children(), out),
        }
    }
}
