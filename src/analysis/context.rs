//! Context classification: how the surrounding expression uses a value.

use tracing::trace;

use crate::base::ExprId;
use crate::tree::{ExprKind, ExprTree};
use crate::types::StaticType;

/// The use a boxing expression is put to, seen from its nearest non-paren
/// ancestor. Derived freshly per query from parent links, never cached, so
/// host edits between queries cannot leave stale classifications behind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnboxContext {
    /// The value is discarded (expression statement).
    Discarded,
    /// The value is the qualifier of a field access or the receiver of a
    /// call. A bare primitive has no members.
    Dereferenced,
    /// Operand of a cast; the cast supplies the target type.
    CastTarget { target: StaticType },
    /// One branch of a conditional. Records the opposite branch's type.
    TernaryBranch {
        sibling_type: StaticType,
        is_then_branch: bool,
    },
    /// Operand of a binary operator. Records the other operand's type and
    /// whether the host proved it non-null.
    BinaryOperand {
        other_type: StaticType,
        other_non_null: bool,
    },
    /// Argument `index` of the call `call`.
    CallArgument { call: ExprId, index: usize },
    /// Anything else: return values, assignment and declaration
    /// initializers, unary operands, conditional conditions, top level.
    Other,
}

/// Classify how `expr`'s value is used.
///
/// Ascends through any number of `Paren` wrappers first; `(((e)))` is used
/// exactly like `e`.
pub fn classify_context(tree: &ExprTree, expr: ExprId) -> UnboxContext {
    let mut top = expr;
    while let Some(parent) = tree.parent_of(top) {
        match tree.kind(parent) {
            ExprKind::Paren { .. } => top = parent,
            _ => break,
        }
    }

    let Some(parent) = tree.parent_of(top) else {
        return UnboxContext::Other;
    };

    let context = match tree.kind(parent) {
        ExprKind::ExprStatement { .. } => UnboxContext::Discarded,
        ExprKind::FieldAccess { .. } => UnboxContext::Dereferenced,
        ExprKind::MethodCall {
            receiver: Some(receiver),
            ..
        } if *receiver == top => UnboxContext::Dereferenced,
        ExprKind::Cast { target, .. } => UnboxContext::CastTarget {
            target: target.clone(),
        },
        ExprKind::Conditional {
            then_branch,
            else_branch,
            ..
        } => {
            if *then_branch == top {
                UnboxContext::TernaryBranch {
                    sibling_type: tree.static_type(*else_branch).clone(),
                    is_then_branch: true,
                }
            } else if *else_branch == top {
                UnboxContext::TernaryBranch {
                    sibling_type: tree.static_type(*then_branch).clone(),
                    is_then_branch: false,
                }
            } else {
                // Condition position: the value is only tested, so the
                // conditional imposes no constraint of its own.
                UnboxContext::Other
            }
        }
        ExprKind::Binary { lhs, rhs, .. } => {
            let other = if *lhs == top { *rhs } else { *lhs };
            UnboxContext::BinaryOperand {
                other_type: tree.static_type(other).clone(),
                other_non_null: tree.is_proven_non_null(other),
            }
        }
        ExprKind::MethodCall { args, .. } | ExprKind::New { args, .. } => {
            match args.iter().position(|arg| *arg == top) {
                Some(index) => UnboxContext::CallArgument {
                    call: parent,
                    index,
                },
                None => UnboxContext::Other,
            }
        }
        _ => UnboxContext::Other,
    };

    trace!("[CLASSIFY] {expr:?} used as {context:?}");
    context
}
