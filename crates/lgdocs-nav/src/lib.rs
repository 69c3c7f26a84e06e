//! Navigation tree for lgdocs.
//!
//! This crate provides:
//! - [`SidebarsDeclaration`]: the parsed `sidebars.toml` input
//! - [`build_tree`]: validating construction of a [`NavigationNode`] forest
//! - [`NavigationTree`]: every sidebar plus document lookups (owning sidebar,
//!   breadcrumbs, render order)
//!
//! # Quick Start
//!
//! ```
//! use lgdocs_nav::SidebarsDeclaration;
//!
//! let declaration = SidebarsDeclaration::from_toml_str(
//!     r#"
//! [[docs]]
//! type = "category"
//! label = "Intro"
//! items = ["getting-started"]
//! "#,
//! )?;
//! let tree = declaration.build()?;
//! assert!(tree.contains("getting-started"));
//! # Ok::<(), lgdocs_nav::NavigationError>(())
//! ```

mod builder;
mod declaration;
mod error;
mod node;
mod tree;

pub use builder::build_tree;
pub use declaration::{SidebarEntry, SidebarItem, SidebarsDeclaration};
pub use error::NavigationError;
pub use node::{Category, DocumentReference, NavigationNode};
pub use tree::{NavigationTree, Sidebar};
