//! Replacement text for a safe unboxing.

use crate::analysis::candidates::{boxing_candidate, BoxingCandidate};
use crate::analysis::decide::Verdict;
use crate::base::ExprId;
use crate::tree::{precedence, ExprTree};

/// The exact source text to substitute for a safely unboxable expression.
///
/// `None` when `expr` is not a boxing candidate or the verdict is
/// [`Verdict::Unsafe`]. The argument text is quoted verbatim from the
/// tree's rendering, parenthesized and cast-prefixed as needed so the
/// result parses the same in the candidate's slot.
pub fn replacement_text(tree: &ExprTree, expr: ExprId, verdict: &Verdict) -> Option<String> {
    let candidate = boxing_candidate(tree, expr)?;
    replacement_for(tree, &candidate, verdict)
}

/// [`replacement_text`] for an already-recognized candidate.
pub(crate) fn replacement_for(
    tree: &ExprTree,
    candidate: &BoxingCandidate,
    verdict: &Verdict,
) -> Option<String> {
    let Verdict::Safe { cast } = verdict else {
        return None;
    };
    let text = tree.text_of(candidate.argument);
    let arg_level = tree.kind(candidate.argument).precedence();
    let slot = tree.slot_level(candidate.expr);

    Some(match cast {
        None => {
            if arg_level > slot {
                format!("({text})")
            } else {
                text.to_string()
            }
        }
        Some(prim) => {
            // The argument becomes a cast operand, and the cast itself
            // takes the candidate's slot.
            let operand = if arg_level > precedence::TYPE_CAST {
                format!("({text})")
            } else {
                text.to_string()
            };
            let cast_text = format!("({}){operand}", prim.java_name());
            if precedence::TYPE_CAST > slot {
                format!("({cast_text})")
            } else {
                cast_text
            }
        }
    })
}
