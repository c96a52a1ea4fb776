//! Java-facing type model.
//!
//! This module provides the type vocabulary the analysis reasons in:
//! - [`PrimitiveType`] - The eight primitives, their wrapper classes, and
//!   the widening order
//! - [`StaticType`] - The static type tag a host attaches to each
//!   expression node
//!
//! Depends only on [`base`](crate::base).

mod primitive;
mod static_type;

pub use primitive::PrimitiveType;
pub use static_type::StaticType;
