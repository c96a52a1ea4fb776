//! Decision-procedure suite: one test per safety rule, plus the concrete
//! end-to-end scenarios.

use boxlint::analysis::{
    analyze, boxing_candidate, classify_context, collect_candidates, decide, replacement_text,
    UnboxContext, Verdict,
};
use boxlint::facts::UnresolvedCalls;
use boxlint::inspect::apply_unboxing;
use boxlint::tree::{BinaryOp, TreeBuilder};
use boxlint::types::{PrimitiveType, StaticType};
use rstest::rstest;

use crate::helpers::fixtures::{
    boolean, boxed_argument_to_foo, boxed_int_in, int, integer, long, returned_long_of_int,
    ternary_with_boxed_then_branch,
};
use crate::helpers::resolvers::{FOO_OVERLOADS, FOO_SINGLE_LONG};

// ============================================================================
// PER-CONTEXT RULES
// ============================================================================

#[test]
fn test_discarded_and_dereferenced_are_always_unsafe() {
    let (tree, boxed) = boxed_int_in(|b, boxed| {
        b.expr_statement(boxed);
    });
    assert_eq!(analyze(&tree, boxed, &UnresolvedCalls), Verdict::Unsafe);

    let (tree, boxed) = boxed_int_in(|b, boxed| {
        b.method_call(Some(boxed), "intValue", vec![], int());
    });
    assert_eq!(analyze(&tree, boxed, &UnresolvedCalls), Verdict::Unsafe);

    let (tree, boxed) = boxed_int_in(|b, boxed| {
        b.field_access(boxed, "value", int());
    });
    assert_eq!(analyze(&tree, boxed, &UnresolvedCalls), Verdict::Unsafe);
}

#[rstest]
#[case::to_object(StaticType::reference("java.lang.Object"), true)]
#[case::to_number(StaticType::reference("java.lang.Number"), true)]
#[case::to_primitive(StaticType::Primitive(PrimitiveType::Long), true)]
#[case::to_type_parameter(StaticType::type_parameter("T"), false)]
fn test_cast_target_rule(#[case] target: StaticType, #[case] safe: bool) {
    let (tree, boxed) = boxed_int_in(|b, boxed| {
        b.cast(target.clone(), boxed);
    });
    let verdict = analyze(&tree, boxed, &UnresolvedCalls);
    if safe {
        // The outer cast supplies the target type; no replacement cast.
        assert_eq!(verdict, Verdict::Safe { cast: None });
    } else {
        assert_eq!(verdict, Verdict::Unsafe);
    }
}

#[rstest]
#[case::primitive_sibling(int(), true)]
#[case::wider_primitive_sibling(long(), true)]
#[case::boxed_sibling(integer(), false)]
#[case::string_sibling(StaticType::reference("java.lang.String"), false)]
#[case::unknown_sibling(StaticType::Unknown, false)]
fn test_ternary_branch_rule(#[case] sibling: StaticType, #[case] safe: bool) {
    let (tree, boxed) = boxed_int_in(|b, boxed| {
        let cond = b.name_ref("cond", boolean());
        let other = b.name_ref("other", sibling.clone());
        b.conditional(cond, boxed, other);
    });
    assert_eq!(
        analyze(&tree, boxed, &UnresolvedCalls).is_safe(),
        safe,
        "sibling {sibling}"
    );
}

#[rstest]
#[case::equal_primitive(int(), false, true)]
#[case::narrower_primitive(StaticType::Primitive(PrimitiveType::Short), false, true)]
#[case::wider_primitive(long(), false, false)]
#[case::proven_non_null_wrapper(integer(), true, true)]
#[case::nullable_wrapper(integer(), false, false)]
#[case::proven_non_null_string(StaticType::reference("java.lang.String"), true, false)]
fn test_binary_operand_rule(
    #[case] sibling: StaticType,
    #[case] non_null: bool,
    #[case] safe: bool,
) {
    let (tree, boxed) = boxed_int_in(|b, boxed| {
        let other = b.name_ref("other", sibling.clone());
        if non_null {
            b.mark_non_null(other);
        }
        b.binary(BinaryOp::Add, boxed, other, StaticType::Unknown);
    });
    assert_eq!(
        analyze(&tree, boxed, &UnresolvedCalls).is_safe(),
        safe,
        "sibling {sibling}, non_null {non_null}"
    );
}

#[test]
fn test_other_contexts_are_safe() {
    let (tree, boxed) = boxed_int_in(|b, boxed| {
        b.return_stmt(Some(boxed));
    });
    assert!(analyze(&tree, boxed, &UnresolvedCalls).is_safe());

    let (tree, boxed) = boxed_int_in(|b, boxed| {
        let target = b.name_ref("n", int());
        b.assignment(target, boxed);
    });
    assert!(analyze(&tree, boxed, &UnresolvedCalls).is_safe());

    // Condition position of a conditional only tests the value.
    let (tree, boxed) = boxed_int_in(|b, boxed| {
        let cmp = b.literal("0", int());
        let cond = b.binary(BinaryOp::Gt, boxed, cmp, boolean());
        let t = b.literal("1", int());
        let e = b.literal("2", int());
        b.conditional(cond, t, e);
    });
    // The boxing sits under the comparison here, not the conditional.
    assert_eq!(
        classify_context(&tree, boxed),
        UnboxContext::BinaryOperand {
            other_type: int(),
            other_non_null: false,
        }
    );
    assert!(analyze(&tree, boxed, &UnresolvedCalls).is_safe());
}

#[test]
fn test_non_candidates_fail_closed() {
    let mut b = TreeBuilder::new();
    let x = b.name_ref("x", int());
    let _decl = b.local_variable("n", int(), x);
    let tree = b.build().unwrap();
    assert_eq!(analyze(&tree, x, &UnresolvedCalls), Verdict::Unsafe);
}

// ============================================================================
// OVERLOAD PRESERVATION
// ============================================================================

#[test]
fn test_overload_flip_keeps_the_boxing() {
    // foo has foo(int) and foo(Object); the boxed call binds foo(Object),
    // the primitive would bind foo(int). Different declarations, so the
    // rewrite is rejected.
    let (tree, boxed, _call) = boxed_argument_to_foo();
    assert_eq!(analyze(&tree, boxed, &*FOO_OVERLOADS), Verdict::Unsafe);
}

#[test]
fn test_stable_resolution_licenses_the_rewrite() {
    let (tree, boxed, _call) = boxed_argument_to_foo();
    let verdict = analyze(&tree, boxed, &*FOO_SINGLE_LONG);
    assert_eq!(verdict, Verdict::Safe { cast: None });
    assert_eq!(replacement_text(&tree, boxed, &verdict), Some("x".to_string()));
}

#[test]
fn test_unresolvable_calls_keep_the_boxing() {
    let (tree, boxed, _call) = boxed_argument_to_foo();
    assert_eq!(analyze(&tree, boxed, &UnresolvedCalls), Verdict::Unsafe);
}

// ============================================================================
// CONCRETE SCENARIOS
// ============================================================================

#[test]
fn test_ternary_scenario_replaces_with_bare_argument() {
    let (tree, boxed) = ternary_with_boxed_then_branch();
    let verdict = analyze(&tree, boxed, &UnresolvedCalls);
    assert_eq!(verdict, Verdict::Safe { cast: None });
    assert_eq!(replacement_text(&tree, boxed, &verdict), Some("x".to_string()));
}

#[test]
fn test_widening_scenario_emits_explicit_cast() {
    let (tree, boxed) = returned_long_of_int();
    let verdict = analyze(&tree, boxed, &UnresolvedCalls);
    assert_eq!(
        verdict,
        Verdict::Safe {
            cast: Some(PrimitiveType::Long)
        }
    );
    assert_eq!(
        replacement_text(&tree, boxed, &verdict),
        Some("(long)x".to_string())
    );
}

#[test]
fn test_applying_a_fix_is_idempotent() {
    let (tree, boxed) = ternary_with_boxed_then_branch();
    let candidate = boxing_candidate(&tree, boxed).unwrap();
    let verdict = decide(
        &tree,
        &candidate,
        &classify_context(&tree, boxed),
        &UnresolvedCalls,
    );
    let rewritten = apply_unboxing(&tree, &candidate, &verdict).unwrap();

    // The rewritten tree holds no boxing at all, so a second run of the
    // analysis has nothing left to remove.
    assert!(collect_candidates(&rewritten).is_empty());
    assert_eq!(rewritten.source(), "int n = cond ? x : 0;");
}
