//! Diagnostics — reporting types for inspection findings.

use std::sync::Arc;

use crate::base::TextRange;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
    Info,
    Hint,
}

impl Severity {
    /// Convert to LSP severity number.
    pub fn to_lsp(&self) -> u32 {
        match self {
            Severity::Error => 1,
            Severity::Warning => 2,
            Severity::Info => 3,
            Severity::Hint => 4,
        }
    }
}

/// A diagnostic message with location.
///
/// Ranges are byte offsets into the analyzed tree's rendered source
/// ([`ExprTree::source`](crate::tree::ExprTree::source)); a host that
/// exported the tree from its own buffers maps them back itself.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    /// The source range this diagnostic covers.
    pub range: TextRange,
    /// Severity level.
    pub severity: Severity,
    /// Warning code (e.g., "W0101").
    pub code: Option<Arc<str>>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Warning,
            code: None,
            message: message.into(),
        }
    }

    /// Create a new info diagnostic.
    pub fn info(range: TextRange, message: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            severity: Severity::Info,
            code: None,
            message: message.into(),
        }
    }

    /// Set the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Set the warning code.
    pub fn with_code(mut self, code: impl Into<Arc<str>>) -> Self {
        self.code = Some(code.into());
        self
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes.
///
/// ## Code Ranges
///
/// - **W0100-W0199**: Boxing and numeric-conversion warnings
pub mod codes {
    /// Boxing that can be removed without changing behavior.
    pub const UNNECESSARY_BOXING: &str = "W0101";
}

/// The standard unnecessary-boxing warning.
pub fn unnecessary_boxing(range: TextRange, boxing: &str, replacement: &str) -> Diagnostic {
    Diagnostic::warning(
        range,
        format!("unnecessary boxing: '{boxing}' can be replaced with '{replacement}'"),
    )
    .with_code(codes::UNNECESSARY_BOXING)
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during an inspection run.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add an unnecessary-boxing warning covering `range`, quoting the
    /// boxing text and the proposed replacement.
    pub fn unnecessary_boxing(&mut self, range: TextRange, boxing: &str, replacement: &str) {
        self.add(unnecessary_boxing(range, boxing, replacement));
    }

    /// All collected diagnostics, in insertion order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the collector, yielding its diagnostics.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
