//! Overload preservation for call arguments.

use tracing::debug;

use crate::base::ExprId;
use crate::facts::CallResolver;
use crate::tree::ExprTree;
use crate::types::StaticType;

/// Whether `call` binds to the same declaration after the argument at
/// `arg_index` is retyped as `substituted`.
///
/// Both resolutions must succeed; an unresolvable call on either side
/// counts as not preserved, so missing resolver facts never license a
/// rewrite.
pub fn preserves_overload(
    tree: &ExprTree,
    resolver: &dyn CallResolver,
    call: ExprId,
    arg_index: usize,
    substituted: &StaticType,
) -> bool {
    let Some(original) = resolver.resolve_call(tree, call) else {
        debug!("[OVERLOAD] {call:?}: original call unresolvable");
        return false;
    };
    let Some(rewritten) = resolver.resolve_call_with_arg_type(tree, call, arg_index, substituted)
    else {
        debug!("[OVERLOAD] {call:?}: unresolvable with arg {arg_index} as {substituted}");
        return false;
    };
    let preserved = original == rewritten;
    if !preserved {
        debug!("[OVERLOAD] {call:?}: {original} != {rewritten}, keeping the boxing");
    }
    preserved
}
