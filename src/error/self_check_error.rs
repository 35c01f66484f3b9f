use crate::error::Diagnostic;

#[derive(Debug, Clone, PartialEq)]
/// Represents a failed case of the self-check suite.
pub enum SelfCheckError {
    /// Evaluation produced a different number than expected.
    WrongValue {
        /// Name of the failing case.
        case:     &'static str,
        /// The evaluated expression, rendered for display.
        expr:     String,
        /// The value the case expected.
        expected: f64,
        /// The value evaluation actually produced.
        found:    f64,
    },
    /// Evaluation reported different diagnostics than expected.
    WrongDiagnostics {
        /// Name of the failing case.
        case:     &'static str,
        /// The diagnostics the case expected, in order.
        expected: Vec<Diagnostic>,
        /// The diagnostics actually reported, in order.
        found:    Vec<Diagnostic>,
    },
}

impl std::fmt::Display for SelfCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongValue { case,
                               expr,
                               expected,
                               found, } => write!(f,
                                                  "Self-check '{case}' failed: {expr} evaluated to {found}, expected {expected}."),
            Self::WrongDiagnostics { case,
                                     expected,
                                     found, } => write!(f,
                                                        "Self-check '{case}' failed: reported {} diagnostic(s), expected {}.",
                                                        found.len(),
                                                        expected.len()),
        }
    }
}

impl std::error::Error for SelfCheckError {}
