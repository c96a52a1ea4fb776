//! Bottom-up tree construction.

use rustc_hash::FxHashSet;
use text_size::{TextRange, TextSize};
use thiserror::Error;
use tracing::trace;

use crate::base::ExprId;
use crate::tree::kind::{BinaryOp, ExprKind, UnaryOp};
use crate::tree::tree::{render, ExprNode, ExprTree};
use crate::types::StaticType;

/// Errors detected when finalizing a tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Build was called with no nodes.
    #[error("cannot build an empty tree")]
    Empty,
    /// A node references an id this builder never handed out.
    #[error("unknown expression id {0:?}")]
    UnknownExpr(ExprId),
    /// The same node is attached under two parents.
    #[error("expression {0:?} is attached under more than one parent")]
    ChildReused(ExprId),
    /// Forged ids produced a parent cycle.
    #[error("expression nodes form a cycle")]
    Cyclic,
}

/// Builds an [`ExprTree`] bottom-up: create children first, pass their ids
/// to the parent constructors. Nodes never attached to a parent become
/// roots, in insertion order.
///
/// Ids are only meaningful within the builder that returned them.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<ExprNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with an explicit shape and static type.
    ///
    /// The typed constructors below cover the common shapes; this is the
    /// escape hatch for hosts assembling [`ExprKind`] values directly.
    /// Children must already be in this builder.
    pub fn insert(&mut self, kind: ExprKind, static_type: StaticType) -> ExprId {
        let id = ExprId::new(self.nodes.len() as u32);
        self.nodes.push(ExprNode {
            kind,
            static_type,
            proven_non_null: false,
            range: TextRange::empty(TextSize::new(0)),
        });
        id
    }

    /// Record that the host proved `id` non-null. No effect on
    /// primitive-typed nodes.
    pub fn mark_non_null(&mut self, id: ExprId) {
        let node = &mut self.nodes[id.index()];
        if !node.static_type.is_primitive() {
            node.proven_non_null = true;
        }
    }

    // ------------------------------------------------------------------
    // Typed constructors
    // ------------------------------------------------------------------

    /// `42`, `'c'`, `true`, ...
    pub fn literal(&mut self, text: impl Into<smol_str::SmolStr>, static_type: StaticType) -> ExprId {
        self.insert(ExprKind::Literal { text: text.into() }, static_type)
    }

    /// `x`, or a class name in receiver position.
    pub fn name_ref(&mut self, name: impl Into<smol_str::SmolStr>, static_type: StaticType) -> ExprId {
        self.insert(ExprKind::NameRef { name: name.into() }, static_type)
    }

    /// `qualifier.name`.
    pub fn field_access(
        &mut self,
        qualifier: ExprId,
        name: impl Into<smol_str::SmolStr>,
        static_type: StaticType,
    ) -> ExprId {
        self.insert(
            ExprKind::FieldAccess {
                qualifier,
                name: name.into(),
            },
            static_type,
        )
    }

    /// `receiver.name(args)` or `name(args)`.
    pub fn method_call(
        &mut self,
        receiver: Option<ExprId>,
        name: impl Into<smol_str::SmolStr>,
        args: Vec<ExprId>,
        static_type: StaticType,
    ) -> ExprId {
        self.insert(
            ExprKind::MethodCall {
                receiver,
                name: name.into(),
                args,
            },
            static_type,
        )
    }

    /// `new ClassName(args)`. The node's type is the class itself.
    pub fn new_object(&mut self, class_name: impl Into<smol_str::SmolStr>, args: Vec<ExprId>) -> ExprId {
        let class_name = class_name.into();
        let static_type = StaticType::Reference(class_name.clone());
        self.insert(ExprKind::New { class_name, args }, static_type)
    }

    /// `(inner)`. Takes its type from the inner expression.
    pub fn paren(&mut self, inner: ExprId) -> ExprId {
        let static_type = self.nodes[inner.index()].static_type.clone();
        self.insert(ExprKind::Paren { inner }, static_type)
    }

    /// `(target) operand`. The node's type is the cast target.
    pub fn cast(&mut self, target: StaticType, operand: ExprId) -> ExprId {
        self.insert(
            ExprKind::Cast {
                target: target.clone(),
                operand,
            },
            target,
        )
    }

    /// `condition ? then_branch : else_branch`. The node's type is the
    /// branches' type when they agree, `Unknown` otherwise (the host can
    /// overwrite via [`TreeBuilder::insert`] if it knows better).
    pub fn conditional(&mut self, condition: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        let then_type = &self.nodes[then_branch.index()].static_type;
        let else_type = &self.nodes[else_branch.index()].static_type;
        let static_type = if then_type == else_type {
            then_type.clone()
        } else {
            StaticType::Unknown
        };
        self.insert(
            ExprKind::Conditional {
                condition,
                then_branch,
                else_branch,
            },
            static_type,
        )
    }

    /// `lhs op rhs`. Numeric promotion is host knowledge, so the result
    /// type is explicit.
    pub fn binary(&mut self, op: BinaryOp, lhs: ExprId, rhs: ExprId, static_type: StaticType) -> ExprId {
        self.insert(ExprKind::Binary { op, lhs, rhs }, static_type)
    }

    /// `op operand`.
    pub fn unary(&mut self, op: UnaryOp, operand: ExprId, static_type: StaticType) -> ExprId {
        self.insert(ExprKind::Unary { op, operand }, static_type)
    }

    /// `target = value`. Takes its type from the target.
    pub fn assignment(&mut self, target: ExprId, value: ExprId) -> ExprId {
        let static_type = self.nodes[target.index()].static_type.clone();
        self.insert(ExprKind::Assignment { target, value }, static_type)
    }

    /// `expr;`
    pub fn expr_statement(&mut self, expr: ExprId) -> ExprId {
        self.insert(ExprKind::ExprStatement { expr }, StaticType::Unknown)
    }

    /// `return value;` or `return;`
    pub fn return_stmt(&mut self, value: Option<ExprId>) -> ExprId {
        self.insert(ExprKind::Return { value }, StaticType::Unknown)
    }

    /// `declared name = initializer;`
    pub fn local_variable(
        &mut self,
        name: impl Into<smol_str::SmolStr>,
        declared: StaticType,
        initializer: ExprId,
    ) -> ExprId {
        self.insert(
            ExprKind::LocalVariable {
                name: name.into(),
                declared,
                initializer,
            },
            StaticType::Unknown,
        )
    }

    // ------------------------------------------------------------------
    // Finalization
    // ------------------------------------------------------------------

    /// Validate the arena, compute parent links and roots, render the
    /// canonical source, and assign every node its byte range.
    pub fn build(mut self) -> Result<ExprTree, TreeError> {
        if self.nodes.is_empty() {
            return Err(TreeError::Empty);
        }

        let len = self.nodes.len();
        let mut parents: Vec<Option<ExprId>> = vec![None; len];
        let mut attached = FxHashSet::default();
        for (index, node) in self.nodes.iter().enumerate() {
            let parent = ExprId::new(index as u32);
            for child in node.kind.children() {
                if child.index() >= len {
                    return Err(TreeError::UnknownExpr(child));
                }
                if !attached.insert(child) {
                    return Err(TreeError::ChildReused(child));
                }
                parents[child.index()] = Some(parent);
            }
        }

        let roots: Vec<ExprId> = (0..len as u32)
            .map(ExprId::new)
            .filter(|id| parents[id.index()].is_none())
            .collect();

        // Parent links without a path to a root can only come from forged
        // ids; refuse rather than render a partial tree.
        if reachable_count(&self.nodes, &roots) != len {
            return Err(TreeError::Cyclic);
        }

        let (source, ranges) = render(&self.nodes, &roots);
        for (node, range) in self.nodes.iter_mut().zip(ranges) {
            node.range = range;
        }

        trace!(
            "[TREE] built tree: {} nodes, {} roots, {} bytes",
            len,
            roots.len(),
            source.len()
        );
        Ok(ExprTree::new(self.nodes, parents, roots, source))
    }
}

fn reachable_count(nodes: &[ExprNode], roots: &[ExprId]) -> usize {
    let mut seen = FxHashSet::default();
    let mut stack: Vec<ExprId> = roots.to_vec();
    while let Some(id) = stack.pop() {
        if seen.insert(id) {
            stack.extend(nodes[id.index()].kind.children());
        }
    }
    seen.len()
}
