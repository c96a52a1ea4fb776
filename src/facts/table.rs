//! A reference [`CallResolver`] over a registered method set.
//!
//! Hosts with a real resolver should adapt that instead. The table
//! implements just enough of Java's invocation applicability to be a
//! faithful oracle for isolated analysis runs: a strict phase without
//! boxing conversions, a loose phase with them, and most-specific
//! selection by summed conversion cost. Receiver types are not modeled;
//! methods are keyed by name and constructors by class name.

use indexmap::IndexMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::base::ExprId;
use crate::facts::{CallResolver, MethodId};
use crate::tree::{ExprKind, ExprTree};
use crate::types::{PrimitiveType, StaticType};

#[derive(Clone, Debug)]
struct Signature {
    name: SmolStr,
    params: Vec<StaticType>,
}

/// Conversion phases, per Java's invocation applicability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Identity and widening conversions only.
    Strict,
    /// Adds boxing and unboxing.
    Loose,
}

/// A registered set of method and constructor signatures, resolvable by
/// name and argument types.
///
/// Registration order is preserved, so resolution is deterministic across
/// runs even for pathological signature sets.
#[derive(Clone, Debug, Default)]
pub struct MethodTable {
    methods: IndexMap<MethodId, Signature>,
}

impl MethodTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method under a unique id. Registering the same id twice
    /// replaces the earlier signature.
    pub fn add_method(
        &mut self,
        id: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        params: Vec<StaticType>,
    ) -> MethodId {
        let id = MethodId::new(id);
        self.methods.insert(
            id.clone(),
            Signature {
                name: normalize(&name.into()).into(),
                params,
            },
        );
        id
    }

    /// Register a constructor for `class_name`.
    pub fn add_constructor(
        &mut self,
        id: impl Into<SmolStr>,
        class_name: impl Into<SmolStr>,
        params: Vec<StaticType>,
    ) -> MethodId {
        self.add_method(id, class_name, params)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Resolve `name(args)`: strict phase first, then loose; within a
    /// phase the lowest summed conversion cost wins, and an exact tie
    /// between two signatures is ambiguous, so resolution fails.
    fn resolve(&self, name: &str, args: &[StaticType]) -> Option<MethodId> {
        let name = normalize(name);
        for phase in [Phase::Strict, Phase::Loose] {
            let mut best: Option<(u32, &MethodId)> = None;
            let mut tied = false;
            for (id, sig) in &self.methods {
                if sig.name != name || sig.params.len() != args.len() {
                    continue;
                }
                let Some(cost) = applicability_cost(&sig.params, args, phase) else {
                    continue;
                };
                match best {
                    Some((min, _)) if cost > min => {}
                    Some((min, _)) if cost == min => tied = true,
                    _ => {
                        best = Some((cost, id));
                        tied = false;
                    }
                }
            }
            if let Some((cost, id)) = best {
                if tied {
                    trace!("[RESOLVE] {name}/{}: ambiguous in {phase:?} phase", args.len());
                    return None;
                }
                trace!("[RESOLVE] {name}/{} -> {id} ({phase:?}, cost {cost})", args.len());
                return Some(id.clone());
            }
        }
        trace!("[RESOLVE] {name}/{}: no applicable signature", args.len());
        None
    }

    fn resolve_node(
        &self,
        tree: &ExprTree,
        call: ExprId,
        substitution: Option<(usize, &StaticType)>,
    ) -> Option<MethodId> {
        let (name, args) = match tree.kind(call) {
            ExprKind::MethodCall { name, args, .. } => (name, args),
            ExprKind::New { class_name, args } => (class_name, args),
            _ => return None,
        };
        let mut arg_types: Vec<StaticType> = args
            .iter()
            .map(|arg| tree.static_type(*arg).clone())
            .collect();
        if let Some((index, substituted)) = substitution {
            if index >= arg_types.len() {
                return None;
            }
            arg_types[index] = substituted.clone();
        }
        self.resolve(name, &arg_types)
    }
}

impl CallResolver for MethodTable {
    fn resolve_call(&self, tree: &ExprTree, call: ExprId) -> Option<MethodId> {
        self.resolve_node(tree, call, None)
    }

    fn resolve_call_with_arg_type(
        &self,
        tree: &ExprTree,
        call: ExprId,
        arg_index: usize,
        substituted: &StaticType,
    ) -> Option<MethodId> {
        self.resolve_node(tree, call, Some((arg_index, substituted)))
    }
}

// ============================================================================
// APPLICABILITY
// ============================================================================

// Cost weights: keep widening distances (1..=6) below a reference upcast,
// and any boxing conversion above every strict conversion.
const COST_REF_UPCAST: u32 = 8;
const COST_TYPE_VAR: u32 = 9;
const COST_BOXING: u32 = 16;

fn applicability_cost(params: &[StaticType], args: &[StaticType], phase: Phase) -> Option<u32> {
    params
        .iter()
        .zip(args)
        .try_fold(0u32, |total, (param, arg)| {
            Some(total + conversion_cost(param, arg, phase)?)
        })
}

/// Cost of converting an `arg` into a `param` slot under `phase`, `None`
/// when no conversion applies. `Unknown` converts to nothing.
fn conversion_cost(param: &StaticType, arg: &StaticType, phase: Phase) -> Option<u32> {
    match (param, arg) {
        (StaticType::Primitive(param), StaticType::Primitive(arg)) => {
            param.widening_distance(*arg).map(u32::from)
        }
        (StaticType::Reference(param), StaticType::Reference(arg)) => reference_cost(param, arg),
        (StaticType::TypeParameter(param), StaticType::TypeParameter(arg)) => {
            Some(if param == arg { 0 } else { COST_TYPE_VAR })
        }
        (StaticType::TypeParameter(_), StaticType::Reference(_)) => Some(COST_TYPE_VAR),
        (StaticType::Reference(param), StaticType::TypeParameter(_)) => {
            is_object(param).then_some(COST_REF_UPCAST)
        }
        // Boxing and unboxing only exist in the loose phase.
        (StaticType::Reference(param), StaticType::Primitive(arg)) if phase == Phase::Loose => {
            let boxed = arg.wrapper_simple_name();
            Some(COST_BOXING + reference_cost(param, boxed)?)
        }
        (StaticType::TypeParameter(_), StaticType::Primitive(_)) if phase == Phase::Loose => {
            Some(COST_BOXING + COST_TYPE_VAR)
        }
        (StaticType::Primitive(param), StaticType::Reference(arg)) if phase == Phase::Loose => {
            let unboxed = PrimitiveType::from_wrapper_name(arg)?;
            Some(COST_BOXING + u32::from(param.widening_distance(unboxed)?))
        }
        _ => None,
    }
}

fn reference_cost(param: &str, arg: &str) -> Option<u32> {
    if normalize(param) == normalize(arg) {
        Some(0)
    } else if is_object(param) {
        Some(COST_REF_UPCAST)
    } else {
        None
    }
}

fn is_object(name: &str) -> bool {
    normalize(name) == "Object"
}

fn normalize(name: &str) -> &str {
    name.strip_prefix("java.lang.").unwrap_or(name)
}
