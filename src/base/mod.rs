//! Foundation types for the boxlint analysis core.
//!
//! This module provides fundamental types used throughout the analysis:
//! - [`ExprId`] - Arena indices for expression nodes
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other boxlint modules.

mod expr_id;

pub use expr_id::ExprId;
pub use text_size::{TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
