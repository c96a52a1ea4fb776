//! Conservative expected-type derivation.
//!
//! Supports the inspection's "only report superfluously boxed" option:
//! a boxing is superfluous when the surrounding context already expects a
//! primitive value, so the wrapper object never outlives the expression.
//! Only parent shapes whose expectation is locally decidable count; call
//! arguments and everything else unprovable count as not-superfluous,
//! which can only suppress reports, never add them.

use crate::base::ExprId;
use crate::tree::{ExprKind, ExprTree};

/// Whether the context around `expr` expects a primitive value.
pub fn expected_primitive(tree: &ExprTree, expr: ExprId) -> bool {
    let mut top = expr;
    while let Some(parent) = tree.parent_of(top) {
        match tree.kind(parent) {
            ExprKind::Paren { .. } => top = parent,
            _ => break,
        }
    }
    let Some(parent) = tree.parent_of(top) else {
        return false;
    };

    match tree.kind(parent) {
        ExprKind::Cast { target, .. } => target.is_primitive(),
        ExprKind::LocalVariable { declared, .. } => declared.is_primitive(),
        ExprKind::Assignment { target, value } if *value == top => {
            tree.static_type(*target).is_primitive()
        }
        ExprKind::Binary { lhs, rhs, .. } => {
            let other = if *lhs == top { *rhs } else { *lhs };
            tree.static_type(other).is_primitive()
        }
        ExprKind::Conditional {
            then_branch,
            else_branch,
            condition,
        } => {
            if *condition == top {
                // The condition slot always expects a boolean.
                true
            } else {
                let sibling = if *then_branch == top {
                    *else_branch
                } else {
                    *then_branch
                };
                tree.static_type(sibling).is_primitive()
            }
        }
        ExprKind::Unary { .. } => true,
        _ => false,
    }
}
