//! The unnecessary-boxing inspection.

use rayon::prelude::*;
use tracing::debug;

use crate::analysis::{
    classify_context, collect_candidates, decide, replacement_for, BoxingCandidate, Verdict,
};
use crate::facts::CallResolver;
use crate::inspect::diagnostics::{self, Diagnostic};
use crate::inspect::expected::expected_primitive;
use crate::tree::ExprTree;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Java language level of the code under inspection.
///
/// Autoboxing arrived with Java 5; below that, wrapper constructions are
/// the only way to box and the inspection stays silent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LanguageLevel {
    Java4,
    Java5,
    Java8,
    Java11,
    Java17,
    Java21,
}

impl LanguageLevel {
    /// Whether this level has autoboxing conversions.
    pub fn supports_autoboxing(self) -> bool {
        self >= LanguageLevel::Java5
    }
}

impl Default for LanguageLevel {
    fn default() -> Self {
        LanguageLevel::Java21
    }
}

/// Options for [`BoxingInspection`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxingInspectionConfig {
    /// Report only boxing whose context already expects a primitive, so
    /// the wrapper object never outlives the expression.
    pub only_report_superfluously_boxed: bool,
    /// Language level of the inspected code.
    pub language_level: LanguageLevel,
}

// ============================================================================
// FINDINGS
// ============================================================================

/// One reportable occurrence of removable boxing.
#[derive(Clone, Debug)]
pub struct Finding {
    /// The recognized boxing expression.
    pub candidate: BoxingCandidate,
    /// The (always safe) verdict that licensed the report.
    pub verdict: Verdict,
    /// The source text to substitute for the boxing expression.
    pub replacement: String,
    /// The report itself.
    pub diagnostic: Diagnostic,
}

// ============================================================================
// INSPECTION
// ============================================================================

/// Finds boxing expressions that can be removed without changing behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxingInspection {
    config: BoxingInspectionConfig,
}

impl BoxingInspection {
    /// An inspection with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// An inspection with explicit options.
    pub fn with_config(config: BoxingInspectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BoxingInspectionConfig {
        &self.config
    }

    /// Inspect one tree. Only candidates with a safe verdict produce
    /// findings, in source order.
    pub fn run(&self, tree: &ExprTree, resolver: &dyn CallResolver) -> Vec<Finding> {
        if !self.config.language_level.supports_autoboxing() {
            debug!(
                "[INSPECT] skipping: {:?} has no autoboxing",
                self.config.language_level
            );
            return Vec::new();
        }

        let mut findings = Vec::new();
        for candidate in collect_candidates(tree) {
            if self.config.only_report_superfluously_boxed
                && !expected_primitive(tree, candidate.expr)
            {
                continue;
            }
            let context = classify_context(tree, candidate.expr);
            let verdict = decide(tree, &candidate, &context, resolver);
            let Some(replacement) = replacement_for(tree, &candidate, &verdict) else {
                continue;
            };
            let diagnostic = diagnostics::unnecessary_boxing(
                tree.range_of(candidate.expr),
                tree.text_of(candidate.expr),
                &replacement,
            );
            findings.push(Finding {
                candidate,
                verdict,
                replacement,
                diagnostic,
            });
        }
        debug!("[INSPECT] {} finding(s) in {} node(s)", findings.len(), tree.len());
        findings
    }

    /// Inspect many trees in parallel. Results line up with the input
    /// order; each tree's findings are independent, so this is a plain
    /// data-parallel map.
    pub fn run_all(
        &self,
        trees: &[ExprTree],
        resolver: &(dyn CallResolver + Sync),
    ) -> Vec<Vec<Finding>> {
        trees
            .par_iter()
            .map(|tree| self.run(tree, resolver))
            .collect()
    }
}
