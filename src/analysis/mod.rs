//! The unboxing safety decision procedure.
//!
//! Given a boxing expression (a wrapper constructor call or a `valueOf`
//! factory call with a primitive argument), decide whether replacing it
//! with the bare primitive preserves behavior, and if so what source text
//! to substitute.
//!
//! The pipeline is three pure steps:
//!
//! ```text
//! boxing_candidate  → recognize the two boxing shapes
//! classify_context  → how the surrounding expression uses the value
//! decide            → per-context safety rules, fail closed on unknowns
//! ```
//!
//! Everything here is a pure function over `&ExprTree` plus a
//! [`CallResolver`](crate::facts::CallResolver); there is no shared mutable
//! state, so callers may run decisions concurrently.

mod candidates;
mod context;
mod decide;
mod overload;
mod replacement;

pub use candidates::{boxing_candidate, collect_candidates, BoxingCandidate};
pub use context::{classify_context, UnboxContext};
pub use decide::{decide, Verdict};
pub use overload::preserves_overload;
pub use replacement::replacement_text;

pub(crate) use replacement::replacement_for;

use crate::base::ExprId;
use crate::facts::CallResolver;
use crate::tree::ExprTree;

/// Analyze one expression end to end: recognize, classify, decide.
///
/// Expressions that are not boxing candidates get `Verdict::Unsafe`, so a
/// host can call this on anything it likes.
pub fn analyze(tree: &ExprTree, expr: ExprId, resolver: &dyn CallResolver) -> Verdict {
    match boxing_candidate(tree, expr) {
        Some(candidate) => {
            let context = classify_context(tree, expr);
            decide(tree, &candidate, &context, resolver)
        }
        None => Verdict::Unsafe,
    }
}
