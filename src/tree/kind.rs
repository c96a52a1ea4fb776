//! Node shapes and operator tables.

use smol_str::SmolStr;

use crate::base::ExprId;
use crate::types::StaticType;

// ============================================================================
// PRECEDENCE LADDER
// ============================================================================

/// Expression precedence levels, mirroring the Java grammar. Lower binds
/// tighter. The replacement builder parenthesizes an argument exactly when
/// its level is greater than [`precedence::TYPE_CAST`].
pub mod precedence {
    /// Literals, names, parenthesized expressions.
    pub const ATOM: u8 = 0;
    /// Method calls, field access, `new`.
    pub const METHOD_CALL: u8 = 1;
    /// Prefix `-`, `!`, `~`.
    pub const PREFIX: u8 = 2;
    /// `(T) e`.
    pub const TYPE_CAST: u8 = 3;
    /// `*`, `/`, `%`.
    pub const MULTIPLICATIVE: u8 = 4;
    /// Binary `+`, `-`.
    pub const ADDITIVE: u8 = 5;
    /// `<<`, `>>`, `>>>`.
    pub const SHIFT: u8 = 6;
    /// `<`, `>`, `<=`, `>=`.
    pub const RELATIONAL: u8 = 7;
    /// `==`, `!=`.
    pub const EQUALITY: u8 = 8;
    /// `&`.
    pub const BITWISE_AND: u8 = 9;
    /// `^`.
    pub const BITWISE_XOR: u8 = 10;
    /// `|`.
    pub const BITWISE_OR: u8 = 11;
    /// `&&`.
    pub const LOGICAL_AND: u8 = 12;
    /// `||`.
    pub const LOGICAL_OR: u8 = 13;
    /// `c ? t : e`.
    pub const CONDITIONAL: u8 = 14;
    /// `=`.
    pub const ASSIGNMENT: u8 = 15;
    /// Statement wrappers; above every expression level.
    pub const STATEMENT: u8 = 16;
}

// ============================================================================
// OPERATORS
// ============================================================================

/// Binary operators the tree distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Mul,
    Div,
    Rem,
    Add,
    Sub,
    Shl,
    Shr,
    UShr,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    BitAnd,
    BitXor,
    BitOr,
    AndAnd,
    OrOr,
}

impl BinaryOp {
    /// The source spelling of this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::Le => "<=",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
            BinaryOp::AndAnd => "&&",
            BinaryOp::OrOr => "||",
        }
    }

    /// Precedence level of an expression headed by this operator.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => precedence::MULTIPLICATIVE,
            BinaryOp::Add | BinaryOp::Sub => precedence::ADDITIVE,
            BinaryOp::Shl | BinaryOp::Shr | BinaryOp::UShr => precedence::SHIFT,
            BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge => precedence::RELATIONAL,
            BinaryOp::Eq | BinaryOp::Ne => precedence::EQUALITY,
            BinaryOp::BitAnd => precedence::BITWISE_AND,
            BinaryOp::BitXor => precedence::BITWISE_XOR,
            BinaryOp::BitOr => precedence::BITWISE_OR,
            BinaryOp::AndAnd => precedence::LOGICAL_AND,
            BinaryOp::OrOr => precedence::LOGICAL_OR,
        }
    }
}

/// Prefix unary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
}

impl UnaryOp {
    /// The source spelling of this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }
}

// ============================================================================
// NODE SHAPES
// ============================================================================

/// The shape of one tree node.
///
/// Covers the expression forms the unboxing analysis distinguishes, plus
/// three statement wrappers that exist purely as classification contexts:
/// an expression statement discards its value, returns and local variable
/// declarations consume one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// A literal: `42`, `3.5f`, `'c'`, `"s"`, `true`.
    Literal { text: SmolStr },
    /// A name: `x`, or a class name used as a call receiver (`Integer`).
    NameRef { name: SmolStr },
    /// Field access: `q.f`.
    FieldAccess { qualifier: ExprId, name: SmolStr },
    /// Method call: `recv.m(a, b)` or `m(a, b)`.
    MethodCall {
        receiver: Option<ExprId>,
        name: SmolStr,
        args: Vec<ExprId>,
    },
    /// Constructor call: `new C(a, b)`.
    New { class_name: SmolStr, args: Vec<ExprId> },
    /// Parenthesized expression: `(e)`.
    Paren { inner: ExprId },
    /// Cast: `(T) e`.
    Cast { target: StaticType, operand: ExprId },
    /// Conditional: `c ? t : e`.
    Conditional {
        condition: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    /// Binary operation: `l op r`.
    Binary { op: BinaryOp, lhs: ExprId, rhs: ExprId },
    /// Prefix unary operation: `op e`.
    Unary { op: UnaryOp, operand: ExprId },
    /// Assignment: `target = value`.
    Assignment { target: ExprId, value: ExprId },
    /// Statement wrapper: `e;`. The value of `e` is discarded.
    ExprStatement { expr: ExprId },
    /// Statement wrapper: `return e;` or `return;`.
    Return { value: Option<ExprId> },
    /// Statement wrapper: `T name = init;`.
    LocalVariable {
        name: SmolStr,
        declared: StaticType,
        initializer: ExprId,
    },
}

impl ExprKind {
    /// Precedence level of this node (see [`precedence`]).
    pub fn precedence(&self) -> u8 {
        match self {
            ExprKind::Literal { .. } | ExprKind::NameRef { .. } | ExprKind::Paren { .. } => {
                precedence::ATOM
            }
            ExprKind::FieldAccess { .. } | ExprKind::MethodCall { .. } | ExprKind::New { .. } => {
                precedence::METHOD_CALL
            }
            ExprKind::Unary { .. } => precedence::PREFIX,
            ExprKind::Cast { .. } => precedence::TYPE_CAST,
            ExprKind::Binary { op, .. } => op.precedence(),
            ExprKind::Conditional { .. } => precedence::CONDITIONAL,
            ExprKind::Assignment { .. } => precedence::ASSIGNMENT,
            ExprKind::ExprStatement { .. }
            | ExprKind::Return { .. }
            | ExprKind::LocalVariable { .. } => precedence::STATEMENT,
        }
    }

    /// Child node ids in source order.
    pub fn children(&self) -> Vec<ExprId> {
        match self {
            ExprKind::Literal { .. } | ExprKind::NameRef { .. } => Vec::new(),
            ExprKind::FieldAccess { qualifier, .. } => vec![*qualifier],
            ExprKind::MethodCall { receiver, args, .. } => {
                receiver.iter().chain(args.iter()).copied().collect()
            }
            ExprKind::New { args, .. } => args.clone(),
            ExprKind::Paren { inner } => vec![*inner],
            ExprKind::Cast { operand, .. } => vec![*operand],
            ExprKind::Conditional {
                condition,
                then_branch,
                else_branch,
            } => vec![*condition, *then_branch, *else_branch],
            ExprKind::Binary { lhs, rhs, .. } => vec![*lhs, *rhs],
            ExprKind::Unary { operand, .. } => vec![*operand],
            ExprKind::Assignment { target, value } => vec![*target, *value],
            ExprKind::ExprStatement { expr } => vec![*expr],
            ExprKind::Return { value } => value.iter().copied().collect(),
            ExprKind::LocalVariable { initializer, .. } => vec![*initializer],
        }
    }

    /// Whether this is one of the statement wrappers.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            ExprKind::ExprStatement { .. } | ExprKind::Return { .. } | ExprKind::LocalVariable { .. }
        )
    }
}
