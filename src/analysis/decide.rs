//! The per-context safety rules.

use tracing::debug;

use crate::analysis::candidates::BoxingCandidate;
use crate::analysis::context::UnboxContext;
use crate::analysis::overload::preserves_overload;
use crate::facts::CallResolver;
use crate::tree::ExprTree;
use crate::types::{PrimitiveType, StaticType};

/// The outcome of a safety decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verdict {
    /// Removing the boxing could change behavior; keep it.
    Unsafe,
    /// The boxing can be removed. `cast` names the primitive to cast the
    /// argument to, `None` when the argument already has exactly the
    /// wrapper's primitive type.
    Safe { cast: Option<PrimitiveType> },
}

impl Verdict {
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe { .. })
    }
}

/// Decide whether `candidate` can be unboxed in `context`.
///
/// Every rule fails closed: unknown types, unresolvable calls, and sibling
/// operands whose null-ness cannot be proven all keep the boxing.
pub fn decide(
    tree: &ExprTree,
    candidate: &BoxingCandidate,
    context: &UnboxContext,
    resolver: &dyn CallResolver,
) -> Verdict {
    let verdict = match context {
        // The value is thrown away or its members are accessed; a bare
        // primitive supports neither.
        UnboxContext::Discarded | UnboxContext::Dereferenced => Verdict::Unsafe,

        // The outer cast supplies the target type, so no replacement cast
        // is needed. A cast to a type variable is the one exception: after
        // erasure it checks against the variable's bound, and a primitive
        // operand would box against a possibly different erasure.
        UnboxContext::CastTarget { target } => match target {
            StaticType::TypeParameter(_) => Verdict::Unsafe,
            _ => Verdict::Safe { cast: None },
        },

        // A primitive branch keeps the whole conditional primitive. A
        // reference (or unknown) sibling forces a common reference type,
        // which would re-box the value we just unwrapped.
        UnboxContext::TernaryBranch { sibling_type, .. } => {
            if sibling_type.is_primitive() {
                safe_with_cast(tree, candidate)
            } else {
                Verdict::Unsafe
            }
        }

        // The other operand must reduce to a primitive that fits the
        // wrapper's counterpart without narrowing. A boxed sibling also
        // has to be proven non-null: a primitive on our side turns the
        // operator numeric, which unboxes the sibling and throws on null.
        UnboxContext::BinaryOperand {
            other_type,
            other_non_null,
        } => {
            let source = match other_type {
                StaticType::Primitive(prim) => Some(*prim),
                StaticType::Reference(name) if *other_non_null => {
                    PrimitiveType::from_wrapper_name(name)
                }
                _ => None,
            };
            match source {
                Some(source) if candidate.wrapper.accepts_widened(source) => {
                    safe_with_cast(tree, candidate)
                }
                _ => Verdict::Unsafe,
            }
        }

        // Boxed and primitive arguments participate differently in
        // overload selection; only proceed when the resolver proves the
        // call binds to the same declaration either way.
        UnboxContext::CallArgument { call, index } => {
            let substituted = StaticType::Primitive(candidate.wrapper);
            if preserves_overload(tree, resolver, *call, *index, &substituted) {
                safe_with_cast(tree, candidate)
            } else {
                Verdict::Unsafe
            }
        }

        UnboxContext::Other => safe_with_cast(tree, candidate),
    };

    debug!(
        "[DECIDE] {:?} ({}) in {context:?} -> {verdict:?}",
        candidate.expr,
        tree.text_of(candidate.expr),
    );
    verdict
}

/// `Safe`, casting only when the argument's type differs from the
/// wrapper's primitive counterpart.
fn safe_with_cast(tree: &ExprTree, candidate: &BoxingCandidate) -> Verdict {
    let counterpart = StaticType::Primitive(candidate.wrapper);
    let cast = if tree.static_type(candidate.argument) == &counterpart {
        None
    } else {
        Some(candidate.wrapper)
    };
    Verdict::Safe { cast }
}
