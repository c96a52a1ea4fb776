//! Inspection driver: whole-tree scans, diagnostics, and the apply step.
//!
//! The [`analysis`](crate::analysis) module decides one expression at a
//! time; this module packages it the way a host tool consumes it:
//!
//! - [`BoxingInspection`] - Scan trees for safely removable boxing,
//!   producing [`Finding`]s with diagnostics and replacement text
//! - [`Diagnostic`], [`DiagnosticCollector`] - Reporting types
//! - [`apply_unboxing`], [`splice`] - The apply step, run by the host
//!   after a verdict, never by the decision procedure

mod diagnostics;
mod expected;
mod fix;
mod inspection;

pub use diagnostics::{codes, Diagnostic, DiagnosticCollector, Severity};
pub use expected::expected_primitive;
pub use fix::{apply_unboxing, apply_unboxing_text, splice};
pub use inspection::{
    BoxingInspection, BoxingInspectionConfig, Finding, LanguageLevel,
};
