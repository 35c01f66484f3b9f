use std::cell::RefCell;

use crate::error::Diagnostic;

/// Receives the diagnostics produced during evaluation.
///
/// Implementations decide where a diagnostic goes. Reporting must not fail:
/// evaluation has already substituted a value and continues regardless.
pub trait DiagnosticSink {
    /// Handles a single diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Writes each diagnostic as a line on standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, diagnostic: &Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Records diagnostics in the order they were reported.
///
/// # Example
/// ```
/// use arithtree::{
///     error::Diagnostic,
///     interpreter::sink::{CollectingSink, DiagnosticSink},
/// };
///
/// let sink = CollectingSink::new();
/// sink.report(&Diagnostic::DivisionByZero);
///
/// assert_eq!(sink.into_diagnostics(), vec![Diagnostic::DivisionByZero]);
/// ```
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl CollectingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic.clone());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}
