//! The call-resolution oracle seam.
//!
//! Static type and nullability facts travel on the tree nodes themselves.
//! Overload resolution cannot: it depends on the full set of declarations
//! visible at the call site, which only the host knows. It stays behind the
//! [`CallResolver`] trait, and the analysis consumes nothing from it except
//! resolved identities to compare.
//!
//! - [`MethodId`] - Opaque identity of a resolved declaration
//! - [`CallResolver`] - The oracle: resolve a call as written, or with one
//!   argument's type hypothetically substituted
//! - [`UnresolvedCalls`] - The no-facts resolver; every call-argument
//!   context then fails closed
//! - [`MethodTable`] - A reference resolver over a registered method set

mod table;

use std::fmt;

use smol_str::SmolStr;

use crate::base::ExprId;
use crate::tree::ExprTree;
use crate::types::StaticType;

pub use table::MethodTable;

/// Opaque identity of a resolved method or constructor.
///
/// Two ids compare equal exactly when they denote the same declaration.
/// The analysis never looks inside.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodId(SmolStr);

impl MethodId {
    pub fn new(id: impl Into<SmolStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves calls to declaration identities.
///
/// Both methods return `None` when resolution fails or the node is not a
/// call; the analysis treats that as "cannot prove" and keeps the boxing.
pub trait CallResolver {
    /// Resolve a `MethodCall` or `New` node as written.
    fn resolve_call(&self, tree: &ExprTree, call: ExprId) -> Option<MethodId>;

    /// Re-resolve `call` as if the argument at `arg_index` had static type
    /// `substituted` instead of its actual one. Everything else about the
    /// call site stays as written.
    fn resolve_call_with_arg_type(
        &self,
        tree: &ExprTree,
        call: ExprId,
        arg_index: usize,
        substituted: &StaticType,
    ) -> Option<MethodId>;
}

/// A resolver with no facts: every resolution fails.
///
/// Useful for hosts that export trees without resolution data; boxing
/// inside call arguments is then never reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnresolvedCalls;

impl CallResolver for UnresolvedCalls {
    fn resolve_call(&self, _tree: &ExprTree, _call: ExprId) -> Option<MethodId> {
        None
    }

    fn resolve_call_with_arg_type(
        &self,
        _tree: &ExprTree,
        _call: ExprId,
        _arg_index: usize,
        _substituted: &StaticType,
    ) -> Option<MethodId> {
        None
    }
}
