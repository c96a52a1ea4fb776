//! # boxlint-base
//!
//! Core library for unnecessary-boxing analysis: given an expression tree
//! exported by a host tool together with static type facts, decide where
//! boxing constructions (`new Integer(x)`, `Integer.valueOf(x)`) can be
//! removed without changing behavior, and produce the replacement text.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! inspect   → inspection driver: findings, diagnostics, apply step
//!   ↓
//! analysis  → context classifier, safety decision, replacement text
//!   ↓
//! facts     → call-resolution oracle (CallResolver, MethodId)
//!   ↓
//! tree      → expression tree: kinds, arena, builder, rendering
//!   ↓
//! types     → type model: primitives, wrapper mapping, widening
//!   ↓
//! base      → primitives (ExprId, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → types → tree → facts → analysis → inspect)
// ============================================================================

/// Foundation types: ExprId, TextRange
pub mod base;

/// Type model: the eight primitives, wrapper mapping, static type tags
pub mod types;

/// Expression tree: node kinds, arena, builder, canonical rendering
pub mod tree;

/// Resolution facts: CallResolver oracle, MethodId, reference table
pub mod facts;

/// The decision procedure: candidates, contexts, verdicts, replacements
pub mod analysis;

/// Inspection driver: whole-tree runs, diagnostics, fix application
pub mod inspect;

// Re-export the analysis entry points
pub use analysis::{analyze, replacement_text, Verdict};

// Re-export foundation types
pub use base::{ExprId, TextRange, TextSize};
