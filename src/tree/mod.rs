//! The expression tree the analysis runs over.
//!
//! Hosts export the syntax region around each boxing candidate into an
//! immutable [`ExprTree`]: one arena of [`ExprNode`]s with parent links,
//! per-node type facts, and byte ranges into a canonical rendering of the
//! tree. The analysis reads trees, it never mutates them.
//!
//! ## Key Data Structures
//!
//! - [`ExprKind`] - The closed set of node shapes (expressions plus the
//!   three statement wrappers that only matter as contexts)
//! - [`ExprTree`] - The finished arena: nodes, parent links, rendered source
//! - [`TreeBuilder`] - Bottom-up construction; children first, then parents

mod builder;
mod kind;
#[allow(clippy::module_inception)]
mod tree;

pub use builder::{TreeBuilder, TreeError};
pub use kind::{precedence, BinaryOp, ExprKind, UnaryOp};
pub use tree::{ExprNode, ExprTree};
