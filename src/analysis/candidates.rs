//! Boxing-candidate recognition.

use crate::base::ExprId;
use crate::tree::{ExprKind, ExprTree};
use crate::types::PrimitiveType;

/// A recognized boxing expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxingCandidate {
    /// The wrapper construction or factory call itself.
    pub expr: ExprId,
    /// The constructed wrapper's primitive counterpart (`Integer` → `int`).
    pub wrapper: PrimitiveType,
    /// The single argument; always primitive-typed.
    pub argument: ExprId,
}

/// Recognize the two boxing shapes: `new Integer(x)` and
/// `Integer.valueOf(x)`, in simple or fully qualified spelling, with
/// exactly one argument of primitive static type.
///
/// Arguments that are themselves boxed (`new Integer(anInteger)`) are not
/// candidates; the unboxing rules below assume a primitive to splice in.
pub fn boxing_candidate(tree: &ExprTree, expr: ExprId) -> Option<BoxingCandidate> {
    let (wrapper, args) = match tree.kind(expr) {
        ExprKind::New { class_name, args } => {
            (PrimitiveType::from_wrapper_name(class_name)?, args)
        }
        ExprKind::MethodCall {
            receiver: Some(receiver),
            name,
            args,
        } if name == "valueOf" => {
            let ExprKind::NameRef { name: class_name } = tree.kind(*receiver) else {
                return None;
            };
            (PrimitiveType::from_wrapper_name(class_name)?, args)
        }
        _ => return None,
    };
    let &[argument] = args.as_slice() else {
        return None;
    };
    if !tree.static_type(argument).is_primitive() {
        return None;
    }
    Some(BoxingCandidate {
        expr,
        wrapper,
        argument,
    })
}

/// All boxing candidates in the tree, in source order.
pub fn collect_candidates(tree: &ExprTree) -> Vec<BoxingCandidate> {
    let mut candidates: Vec<BoxingCandidate> = tree
        .ids()
        .filter_map(|id| boxing_candidate(tree, id))
        .collect();
    candidates.sort_by_key(|candidate| tree.range_of(candidate.expr).start());
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::TreeBuilder;
    use crate::types::StaticType;

    fn int() -> StaticType {
        StaticType::Primitive(PrimitiveType::Int)
    }

    #[test]
    fn test_recognizes_constructor_and_factory() {
        let mut b = TreeBuilder::new();
        let x = b.name_ref("x", int());
        let ctor = b.new_object("java.lang.Integer", vec![x]);

        let y = b.name_ref("y", StaticType::Primitive(PrimitiveType::Long));
        let receiver = b.name_ref("Long", StaticType::reference("java.lang.Long"));
        let factory = b.method_call(
            Some(receiver),
            "valueOf",
            vec![y],
            StaticType::reference("java.lang.Long"),
        );
        let tree = b.build().unwrap();

        assert_eq!(
            boxing_candidate(&tree, ctor),
            Some(BoxingCandidate {
                expr: ctor,
                wrapper: PrimitiveType::Int,
                argument: x,
            })
        );
        assert_eq!(
            boxing_candidate(&tree, factory),
            Some(BoxingCandidate {
                expr: factory,
                wrapper: PrimitiveType::Long,
                argument: y,
            })
        );
    }

    #[test]
    fn test_rejects_non_boxing_shapes() {
        let mut b = TreeBuilder::new();
        let x = b.name_ref("x", int());
        let plain_new = b.new_object("StringBuilder", vec![x]);

        let y = b.name_ref("y", int());
        let parse_receiver = b.name_ref("Integer", StaticType::reference("java.lang.Integer"));
        let parse = b.method_call(
            Some(parse_receiver),
            "parseInt",
            vec![y],
            int(),
        );

        let z = b.name_ref("z", int());
        let bare_value_of = b.method_call(None, "valueOf", vec![z], StaticType::Unknown);
        let tree = b.build().unwrap();

        assert_eq!(boxing_candidate(&tree, plain_new), None);
        assert_eq!(boxing_candidate(&tree, parse), None);
        assert_eq!(boxing_candidate(&tree, bare_value_of), None);
        assert_eq!(boxing_candidate(&tree, x), None);
    }

    #[test]
    fn test_rejects_non_primitive_and_multi_arguments() {
        let mut b = TreeBuilder::new();
        let already_boxed = b.name_ref("boxed", StaticType::reference("java.lang.Integer"));
        let rebox = b.new_object("Integer", vec![already_boxed]);

        let unknown = b.name_ref("mystery", StaticType::Unknown);
        let from_unknown = b.new_object("Integer", vec![unknown]);

        let a = b.name_ref("a", int());
        let c = b.name_ref("c", int());
        let two_args = b.new_object("Integer", vec![a, c]);
        let tree = b.build().unwrap();

        assert_eq!(boxing_candidate(&tree, rebox), None);
        assert_eq!(boxing_candidate(&tree, from_unknown), None);
        assert_eq!(boxing_candidate(&tree, two_args), None);
    }

    #[test]
    fn test_collects_in_source_order() {
        let mut b = TreeBuilder::new();
        let x = b.name_ref("x", int());
        let first = b.new_object("Integer", vec![x]);
        let _stmt1 = b.expr_statement(first);

        let y = b.name_ref("y", int());
        let second = b.new_object("Integer", vec![y]);
        let _stmt2 = b.expr_statement(second);
        let tree = b.build().unwrap();

        let found = collect_candidates(&tree);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].expr, first);
        assert_eq!(found[1].expr, second);
    }
}
