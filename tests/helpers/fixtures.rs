//! Tree fixtures: the recurring shapes the suites analyze.
//!
//! Each builder returns the finished tree together with the ids the test
//! needs to point the analysis at.

use boxlint::base::ExprId;
use boxlint::tree::{ExprTree, TreeBuilder};
use boxlint::types::{PrimitiveType, StaticType};

pub fn int() -> StaticType {
    StaticType::Primitive(PrimitiveType::Int)
}

pub fn long() -> StaticType {
    StaticType::Primitive(PrimitiveType::Long)
}

pub fn boolean() -> StaticType {
    StaticType::Primitive(PrimitiveType::Boolean)
}

pub fn integer() -> StaticType {
    StaticType::reference("java.lang.Integer")
}

pub fn object() -> StaticType {
    StaticType::reference("java.lang.Object")
}

/// `cond ? new Integer(x) : 0` with `x: int`, as a local initializer.
///
/// Returns the tree and the boxing expression.
pub fn ternary_with_boxed_then_branch() -> (ExprTree, ExprId) {
    let mut b = TreeBuilder::new();
    let cond = b.name_ref("cond", boolean());
    let x = b.name_ref("x", int());
    let boxed = b.new_object("Integer", vec![x]);
    let zero = b.literal("0", int());
    let ternary = b.conditional(cond, boxed, zero);
    let _decl = b.local_variable("n", int(), ternary);
    (b.build().unwrap(), boxed)
}

/// `foo(Integer.valueOf(x))` with `x: int`.
///
/// Returns the tree, the boxing expression, and the enclosing call.
pub fn boxed_argument_to_foo() -> (ExprTree, ExprId, ExprId) {
    let mut b = TreeBuilder::new();
    let x = b.name_ref("x", int());
    let receiver = b.name_ref("Integer", integer());
    let boxed = b.method_call(Some(receiver), "valueOf", vec![x], integer());
    let call = b.method_call(None, "foo", vec![boxed], StaticType::Unknown);
    let _stmt = b.expr_statement(call);
    (b.build().unwrap(), boxed, call)
}

/// `return new Long(x);` with `x: int`: the widening-cast scenario.
pub fn returned_long_of_int() -> (ExprTree, ExprId) {
    let mut b = TreeBuilder::new();
    let x = b.name_ref("x", int());
    let boxed = b.new_object("Long", vec![x]);
    let _ret = b.return_stmt(Some(boxed));
    (b.build().unwrap(), boxed)
}

/// `new Integer(x)` wrapped by `wrap`, which receives the builder and the
/// boxing expression and must attach it somewhere.
pub fn boxed_int_in(
    wrap: impl FnOnce(&mut TreeBuilder, ExprId),
) -> (ExprTree, ExprId) {
    let mut b = TreeBuilder::new();
    let x = b.name_ref("x", int());
    let boxed = b.new_object("Integer", vec![x]);
    wrap(&mut b, boxed);
    (b.build().unwrap(), boxed)
}
