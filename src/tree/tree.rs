//! The finished expression tree: arena, parent links, canonical rendering.

use crate::base::{ExprId, TextRange, TextSize};
use crate::tree::kind::{precedence, ExprKind};
use crate::types::StaticType;

/// One node of an [`ExprTree`].
#[derive(Clone, Debug)]
pub struct ExprNode {
    /// The node shape.
    pub kind: ExprKind,
    /// Static type reported by the host's type facts.
    pub static_type: StaticType,
    /// Whether the host proved this expression non-null (definite
    /// assignment, `@NotNull`, ...). Always false for primitives.
    pub proven_non_null: bool,
    /// Byte range of this node in [`ExprTree::source`].
    pub range: TextRange,
}

/// An immutable expression tree.
///
/// Nodes live in one arena; [`ExprId`]s index into it. Parent links are
/// precomputed so context classification is one lookup per step. `source`
/// is the canonical rendering of the tree, and every node's `range` points
/// into it, so replacement text can quote argument text verbatim.
#[derive(Clone, Debug)]
pub struct ExprTree {
    nodes: Vec<ExprNode>,
    parents: Vec<Option<ExprId>>,
    roots: Vec<ExprId>,
    source: String,
}

impl ExprTree {
    pub(crate) fn new(
        nodes: Vec<ExprNode>,
        parents: Vec<Option<ExprId>>,
        roots: Vec<ExprId>,
        source: String,
    ) -> Self {
        Self {
            nodes,
            parents,
            roots,
            source,
        }
    }

    /// The node for `id`.
    ///
    /// Panics if `id` did not come from this tree's builder.
    pub fn node(&self, id: ExprId) -> &ExprNode {
        &self.nodes[id.index()]
    }

    /// Shape of the node.
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.node(id).kind
    }

    /// Static type of the node.
    pub fn static_type(&self, id: ExprId) -> &StaticType {
        &self.node(id).static_type
    }

    /// Whether the host proved the node non-null.
    pub fn is_proven_non_null(&self, id: ExprId) -> bool {
        self.node(id).proven_non_null
    }

    /// Byte range of the node in [`ExprTree::source`].
    pub fn range_of(&self, id: ExprId) -> TextRange {
        self.node(id).range
    }

    /// The node's parent, `None` for roots.
    pub fn parent_of(&self, id: ExprId) -> Option<ExprId> {
        self.parents[id.index()]
    }

    /// Argument list of a call node, in source order. Empty for nodes that
    /// take no arguments; a call receiver is not an argument.
    pub fn arguments_of(&self, id: ExprId) -> &[ExprId] {
        match self.kind(id) {
            ExprKind::MethodCall { args, .. } | ExprKind::New { args, .. } => args,
            _ => &[],
        }
    }

    /// Top-level nodes (statements or bare expressions), in insertion order.
    pub fn roots(&self) -> &[ExprId] {
        &self.roots
    }

    /// All node ids, in arena order (children before parents).
    pub fn ids(&self) -> impl Iterator<Item = ExprId> + '_ {
        (0..self.nodes.len() as u32).map(ExprId::new)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The canonical rendering of the whole tree, one line per root.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Source text of one node.
    pub fn text_of(&self, id: ExprId) -> &str {
        let range = self.range_of(id);
        &self.source[usize::from(range.start())..usize::from(range.end())]
    }

    /// The loosest precedence level the node's slot admits without
    /// parentheses. Mirrors the levels the renderer passes for each child
    /// position, so replacement text parenthesizes exactly where a
    /// re-render of the substituted tree would.
    pub(crate) fn slot_level(&self, id: ExprId) -> u8 {
        let Some(parent) = self.parent_of(id) else {
            return precedence::STATEMENT;
        };
        match self.kind(parent) {
            ExprKind::FieldAccess { .. } => precedence::METHOD_CALL,
            ExprKind::MethodCall { receiver, .. } if *receiver == Some(id) => {
                precedence::METHOD_CALL
            }
            ExprKind::MethodCall { .. } | ExprKind::New { .. } => precedence::ASSIGNMENT,
            ExprKind::Paren { .. } => precedence::STATEMENT,
            ExprKind::Cast { .. } => precedence::TYPE_CAST,
            ExprKind::Conditional {
                condition,
                else_branch,
                ..
            } => {
                if *condition == id {
                    precedence::CONDITIONAL - 1
                } else if *else_branch == id {
                    precedence::CONDITIONAL
                } else {
                    precedence::ASSIGNMENT
                }
            }
            ExprKind::Binary { op, rhs, .. } => {
                if *rhs == id {
                    op.precedence() - 1
                } else {
                    op.precedence()
                }
            }
            ExprKind::Unary { .. } => precedence::PREFIX,
            ExprKind::Assignment { target, .. } if *target == id => precedence::METHOD_CALL,
            ExprKind::Assignment { .. }
            | ExprKind::ExprStatement { .. }
            | ExprKind::Return { .. }
            | ExprKind::LocalVariable { .. } => precedence::ASSIGNMENT,
            ExprKind::Literal { .. } | ExprKind::NameRef { .. } => precedence::STATEMENT,
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Render nodes to canonical source and record each node's byte range.
///
/// Children whose precedence is looser than their slot allows are wrapped
/// in parentheses in the text; the recorded range stays on the child's own
/// text, inside such parentheses.
pub(crate) fn render(nodes: &[ExprNode], roots: &[ExprId]) -> (String, Vec<TextRange>) {
    let mut out = String::new();
    let mut ranges = vec![TextRange::empty(TextSize::new(0)); nodes.len()];
    for (i, root) in roots.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_node(nodes, *root, &mut out, &mut ranges);
    }
    (out, ranges)
}

fn render_node(nodes: &[ExprNode], id: ExprId, out: &mut String, ranges: &mut [TextRange]) {
    let start = out.len();
    match &nodes[id.index()].kind {
        ExprKind::Literal { text } => out.push_str(text),
        ExprKind::NameRef { name } => out.push_str(name),
        ExprKind::FieldAccess { qualifier, name } => {
            render_child(nodes, *qualifier, precedence::METHOD_CALL, out, ranges);
            out.push('.');
            out.push_str(name);
        }
        ExprKind::MethodCall {
            receiver,
            name,
            args,
        } => {
            if let Some(receiver) = receiver {
                render_child(nodes, *receiver, precedence::METHOD_CALL, out, ranges);
                out.push('.');
            }
            out.push_str(name);
            render_arg_list(nodes, args, out, ranges);
        }
        ExprKind::New { class_name, args } => {
            out.push_str("new ");
            out.push_str(class_name);
            render_arg_list(nodes, args, out, ranges);
        }
        ExprKind::Paren { inner } => {
            out.push('(');
            render_node(nodes, *inner, out, ranges);
            out.push(')');
        }
        ExprKind::Cast { target, operand } => {
            out.push('(');
            out.push_str(target.display_name());
            out.push(')');
            render_child(nodes, *operand, precedence::TYPE_CAST, out, ranges);
        }
        ExprKind::Conditional {
            condition,
            then_branch,
            else_branch,
        } => {
            render_child(nodes, *condition, precedence::CONDITIONAL - 1, out, ranges);
            out.push_str(" ? ");
            render_child(nodes, *then_branch, precedence::ASSIGNMENT, out, ranges);
            out.push_str(" : ");
            render_child(nodes, *else_branch, precedence::CONDITIONAL, out, ranges);
        }
        ExprKind::Binary { op, lhs, rhs } => {
            // Left associative: equal precedence stays bare on the left,
            // needs parentheses on the right.
            render_child(nodes, *lhs, op.precedence(), out, ranges);
            out.push(' ');
            out.push_str(op.symbol());
            out.push(' ');
            render_child(nodes, *rhs, op.precedence() - 1, out, ranges);
        }
        ExprKind::Unary { op, operand } => {
            out.push_str(op.symbol());
            render_child(nodes, *operand, precedence::PREFIX, out, ranges);
        }
        ExprKind::Assignment { target, value } => {
            render_child(nodes, *target, precedence::METHOD_CALL, out, ranges);
            out.push_str(" = ");
            render_child(nodes, *value, precedence::ASSIGNMENT, out, ranges);
        }
        ExprKind::ExprStatement { expr } => {
            render_child(nodes, *expr, precedence::ASSIGNMENT, out, ranges);
            out.push(';');
        }
        ExprKind::Return { value } => {
            out.push_str("return");
            if let Some(value) = value {
                out.push(' ');
                render_child(nodes, *value, precedence::ASSIGNMENT, out, ranges);
            }
            out.push(';');
        }
        ExprKind::LocalVariable {
            name,
            declared,
            initializer,
        } => {
            out.push_str(declared.display_name());
            out.push(' ');
            out.push_str(name);
            out.push_str(" = ");
            render_child(nodes, *initializer, precedence::ASSIGNMENT, out, ranges);
            out.push(';');
        }
    }
    ranges[id.index()] = TextRange::new(
        TextSize::new(start as u32),
        TextSize::new(out.len() as u32),
    );
}

fn render_child(
    nodes: &[ExprNode],
    id: ExprId,
    max_level: u8,
    out: &mut String,
    ranges: &mut [TextRange],
) {
    if nodes[id.index()].kind.precedence() > max_level {
        out.push('(');
        render_node(nodes, id, out, ranges);
        out.push(')');
    } else {
        render_node(nodes, id, out, ranges);
    }
}

fn render_arg_list(nodes: &[ExprNode], args: &[ExprId], out: &mut String, ranges: &mut [TextRange]) {
    out.push('(');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        render_child(nodes, *arg, precedence::ASSIGNMENT, out, ranges);
    }
    out.push(')');
}
