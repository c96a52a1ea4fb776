//! Inspection-driver suite: whole-tree runs, options, and the apply step.

use boxlint::analysis::collect_candidates;
use boxlint::facts::UnresolvedCalls;
use boxlint::inspect::{
    apply_unboxing, apply_unboxing_text, codes, splice, BoxingInspection, BoxingInspectionConfig,
    LanguageLevel, Severity,
};
use boxlint::tree::{ExprTree, TreeBuilder};
use boxlint::types::StaticType;

use crate::helpers::fixtures::{int, integer};
use crate::helpers::resolvers::{FOO_OVERLOADS, FOO_SINGLE_LONG};

/// Three statements: a safe initializer boxing, a boxing kept by its
/// reference-typed declaration when the superfluous filter is on, and a
/// discarded (unsafe) boxing.
fn three_statement_tree() -> ExprTree {
    let mut b = TreeBuilder::new();
    let x = b.name_ref("x", int());
    let first = b.new_object("Integer", vec![x]);
    let _decl = b.local_variable("n", int(), first);

    let y = b.name_ref("y", int());
    let second = b.new_object("Integer", vec![y]);
    let _decl2 = b.local_variable("boxed", integer(), second);

    let z = b.name_ref("z", int());
    let third = b.new_object("Integer", vec![z]);
    let _stmt = b.expr_statement(third);
    b.build().unwrap()
}

#[test]
fn test_findings_carry_diagnostics_and_replacements() {
    let tree = three_statement_tree();
    let findings = BoxingInspection::new().run(&tree, &UnresolvedCalls);

    assert_eq!(findings.len(), 2);
    let first = &findings[0];
    assert_eq!(first.replacement, "x");
    assert_eq!(first.diagnostic.severity, Severity::Warning);
    assert_eq!(first.diagnostic.code.as_deref(), Some(codes::UNNECESSARY_BOXING));
    assert_eq!(
        &*first.diagnostic.message,
        "unnecessary boxing: 'new Integer(x)' can be replaced with 'x'"
    );
    assert_eq!(&tree.source()[first.diagnostic.range], "new Integer(x)");
}

#[test]
fn test_superfluous_only_reports_primitive_expecting_contexts() {
    let tree = three_statement_tree();
    let inspection = BoxingInspection::with_config(BoxingInspectionConfig {
        only_report_superfluously_boxed: true,
        ..Default::default()
    });
    let findings = inspection.run(&tree, &UnresolvedCalls);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].replacement, "x");
}

#[test]
fn test_language_level_gate() {
    let tree = three_statement_tree();
    for level in [LanguageLevel::Java4] {
        let inspection = BoxingInspection::with_config(BoxingInspectionConfig {
            language_level: level,
            ..Default::default()
        });
        assert!(inspection.run(&tree, &UnresolvedCalls).is_empty());
    }
    for level in [LanguageLevel::Java5, LanguageLevel::Java21] {
        let inspection = BoxingInspection::with_config(BoxingInspectionConfig {
            language_level: level,
            ..Default::default()
        });
        assert_eq!(inspection.run(&tree, &UnresolvedCalls).len(), 2);
    }
}

#[test]
fn test_resolver_gates_call_argument_findings() {
    let mut b = TreeBuilder::new();
    let x = b.name_ref("x", int());
    let receiver = b.name_ref("Integer", integer());
    let boxed = b.method_call(Some(receiver), "valueOf", vec![x], integer());
    let call = b.method_call(None, "foo", vec![boxed], StaticType::Unknown);
    let _stmt = b.expr_statement(call);
    let tree = b.build().unwrap();

    let inspection = BoxingInspection::new();
    // Overload flip: foo(Object) today, foo(int) after the rewrite.
    assert!(inspection.run(&tree, &*FOO_OVERLOADS).is_empty());
    // One foo(long) either way.
    let findings = inspection.run(&tree, &*FOO_SINGLE_LONG);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].replacement, "x");
}

#[test]
fn test_run_all_scans_trees_independently() {
    let trees: Vec<ExprTree> = (0..16).map(|_| three_statement_tree()).collect();
    let all = BoxingInspection::new().run_all(&trees, &UnresolvedCalls);
    assert_eq!(all.len(), trees.len());
    for findings in &all {
        assert_eq!(findings.len(), 2);
    }
}

#[test]
fn test_applying_every_finding_clears_the_tree() {
    // Findings are applied one at a time; re-running the inspection on
    // each rewritten tree converges to no findings.
    let mut tree = three_statement_tree();
    let inspection = BoxingInspection::new();
    loop {
        let findings = inspection.run(&tree, &UnresolvedCalls);
        let Some(finding) = findings.first() else {
            break;
        };
        let rewritten = apply_unboxing(&tree, &finding.candidate, &finding.verdict).unwrap();
        let spliced = apply_unboxing_text(&tree, &finding.candidate, &finding.verdict).unwrap();
        assert_eq!(rewritten.source(), spliced);
        tree = rewritten;
    }
    assert!(inspection.run(&tree, &UnresolvedCalls).is_empty());
    // The unsafe discarded boxing stays behind, untouched.
    assert_eq!(collect_candidates(&tree).len(), 1);
    assert_eq!(tree.source(), "int n = x;\nInteger boxed = y;\nnew Integer(z);");
}

#[test]
fn test_splice_composes_with_tree_text() {
    let (tree, boxed) = crate::helpers::fixtures::returned_long_of_int();
    let verdict = boxlint::analyze(&tree, boxed, &UnresolvedCalls);
    let replacement = boxlint::replacement_text(&tree, boxed, &verdict).unwrap();
    assert_eq!(
        splice(tree.source(), tree.range_of(boxed), &replacement),
        "return (long)x;"
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_diagnostics_serialize_for_host_transport() {
    let tree = three_statement_tree();
    let findings = BoxingInspection::new().run(&tree, &UnresolvedCalls);
    let json = serde_json::to_value(&findings[0].diagnostic).unwrap();
    assert_eq!(json["severity"], "Warning");
    assert_eq!(json["code"], codes::UNNECESSARY_BOXING);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .contains("new Integer(x)"));
}
