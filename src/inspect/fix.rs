//! The apply step: rewrite a tree (or its text) after a safe verdict.
//!
//! The decision procedure never mutates anything; applying a fix is a
//! separate step the host runs with exclusive access to its buffers. Two
//! equivalent forms are provided: a structural rewrite producing a fresh
//! tree, and a single in-place text edit. Rendering the rewritten tree
//! yields exactly the spliced text.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::analysis::{replacement_for, BoxingCandidate, Verdict};
use crate::base::{ExprId, TextRange};
use crate::tree::{ExprKind, ExprTree, TreeBuilder};
use crate::types::StaticType;

/// Rebuild `tree` with `candidate` replaced by its argument, wrapped in a
/// cast when the verdict calls for one.
///
/// `None` when the verdict is [`Verdict::Unsafe`]. The candidate's boxing
/// shell (and a factory call's receiver) is dropped; every other node is
/// carried over with its type and nullability facts.
pub fn apply_unboxing(
    tree: &ExprTree,
    candidate: &BoxingCandidate,
    verdict: &Verdict,
) -> Option<ExprTree> {
    let Verdict::Safe { cast } = verdict else {
        return None;
    };

    let mut builder = TreeBuilder::new();
    let mut mapping = FxHashMap::default();
    for root in tree.roots() {
        copy_subtree(tree, *root, candidate, *cast, &mut builder, &mut mapping);
    }
    // The input tree already validated; the copy preserves its shape.
    let rewritten = builder.build().ok()?;
    debug!(
        "[FIX] unboxed {} -> {} nodes",
        tree.len(),
        rewritten.len()
    );
    Some(rewritten)
}

fn copy_subtree(
    tree: &ExprTree,
    id: ExprId,
    candidate: &BoxingCandidate,
    cast: Option<crate::types::PrimitiveType>,
    builder: &mut TreeBuilder,
    mapping: &mut FxHashMap<ExprId, ExprId>,
) -> ExprId {
    if id == candidate.expr {
        // Drop the boxing shell; splice the argument, cast if needed.
        let argument = copy_plain(tree, candidate.argument, builder, mapping);
        let new_id = match cast {
            Some(prim) => builder.cast(StaticType::Primitive(prim), argument),
            None => argument,
        };
        mapping.insert(id, new_id);
        return new_id;
    }
    copy_plain_via(tree, id, builder, mapping, |tree, child, builder, mapping| {
        copy_subtree(tree, child, candidate, cast, builder, mapping)
    })
}

fn copy_plain(
    tree: &ExprTree,
    id: ExprId,
    builder: &mut TreeBuilder,
    mapping: &mut FxHashMap<ExprId, ExprId>,
) -> ExprId {
    copy_plain_via(tree, id, builder, mapping, copy_plain)
}

fn copy_plain_via(
    tree: &ExprTree,
    id: ExprId,
    builder: &mut TreeBuilder,
    mapping: &mut FxHashMap<ExprId, ExprId>,
    mut recurse: impl FnMut(&ExprTree, ExprId, &mut TreeBuilder, &mut FxHashMap<ExprId, ExprId>) -> ExprId
        + Copy,
) -> ExprId {
    let kind = match tree.kind(id) {
        ExprKind::Literal { text } => ExprKind::Literal { text: text.clone() },
        ExprKind::NameRef { name } => ExprKind::NameRef { name: name.clone() },
        ExprKind::FieldAccess { qualifier, name } => ExprKind::FieldAccess {
            qualifier: recurse(tree, *qualifier, builder, mapping),
            name: name.clone(),
        },
        ExprKind::MethodCall {
            receiver,
            name,
            args,
        } => ExprKind::MethodCall {
            receiver: receiver
                .as_ref()
                .map(|r| recurse(tree, *r, builder, mapping)),
            name: name.clone(),
            args: args
                .iter()
                .map(|arg| recurse(tree, *arg, builder, mapping))
                .collect(),
        },
        ExprKind::New { class_name, args } => ExprKind::New {
            class_name: class_name.clone(),
            args: args
                .iter()
                .map(|arg| recurse(tree, *arg, builder, mapping))
                .collect(),
        },
        ExprKind::Paren { inner } => ExprKind::Paren {
            inner: recurse(tree, *inner, builder, mapping),
        },
        ExprKind::Cast { target, operand } => ExprKind::Cast {
            target: target.clone(),
            operand: recurse(tree, *operand, builder, mapping),
        },
        ExprKind::Conditional {
            condition,
            then_branch,
            else_branch,
        } => {
            let condition = recurse(tree, *condition, builder, mapping);
            let then_branch = recurse(tree, *then_branch, builder, mapping);
            let else_branch = recurse(tree, *else_branch, builder, mapping);
            ExprKind::Conditional {
                condition,
                then_branch,
                else_branch,
            }
        }
        ExprKind::Binary { op, lhs, rhs } => {
            let op = *op;
            let lhs = recurse(tree, *lhs, builder, mapping);
            let rhs = recurse(tree, *rhs, builder, mapping);
            ExprKind::Binary { op, lhs, rhs }
        }
        ExprKind::Unary { op, operand } => ExprKind::Unary {
            op: *op,
            operand: recurse(tree, *operand, builder, mapping),
        },
        ExprKind::Assignment { target, value } => {
            let target = recurse(tree, *target, builder, mapping);
            let value = recurse(tree, *value, builder, mapping);
            ExprKind::Assignment { target, value }
        }
        ExprKind::ExprStatement { expr } => ExprKind::ExprStatement {
            expr: recurse(tree, *expr, builder, mapping),
        },
        ExprKind::Return { value } => ExprKind::Return {
            value: value.as_ref().map(|v| recurse(tree, *v, builder, mapping)),
        },
        ExprKind::LocalVariable {
            name,
            declared,
            initializer,
        } => ExprKind::LocalVariable {
            name: name.clone(),
            declared: declared.clone(),
            initializer: recurse(tree, *initializer, builder, mapping),
        },
    };
    let new_id = builder.insert(kind, tree.static_type(id).clone());
    if tree.is_proven_non_null(id) {
        builder.mark_non_null(new_id);
    }
    mapping.insert(id, new_id);
    new_id
}

/// The in-place text-edit form of a fix: replace `range` in `source` with
/// `replacement`.
pub fn splice(source: &str, range: TextRange, replacement: &str) -> String {
    let mut edited = String::with_capacity(source.len() + replacement.len());
    edited.push_str(&source[..usize::from(range.start())]);
    edited.push_str(replacement);
    edited.push_str(&source[usize::from(range.end())..]);
    edited
}

/// [`splice`] driven by a candidate and its verdict: the one edit a host
/// applies for an accepted fix. `None` when the verdict is unsafe.
pub fn apply_unboxing_text(
    tree: &ExprTree,
    candidate: &BoxingCandidate,
    verdict: &Verdict,
) -> Option<String> {
    let replacement = replacement_for(tree, candidate, verdict)?;
    Some(splice(
        tree.source(),
        tree.range_of(candidate.expr),
        &replacement,
    ))
}
