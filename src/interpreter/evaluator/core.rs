use tracing::debug;

use crate::{
    ast::Expr,
    error::Diagnostic,
    interpreter::{environment::Environment, sink::DiagnosticSink},
};

/// Value substituted for a variable that is not bound in the environment.
pub const UNDEFINED_VARIABLE_VALUE: f64 = 0.0;
/// Value substituted for a division whose divisor is zero.
pub const DIVISION_BY_ZERO_VALUE: f64 = f64::INFINITY;

/// Stores the state needed to evaluate a tree.
///
/// ## Usage
///
/// A `Context` borrows the caller's [`Environment`] and a [`DiagnosticSink`].
/// It is cheap to create and can be reused for any number of trees. Since the
/// environment is borrowed immutably, bindings are fixed for as long as the
/// context lives.
pub struct Context<'a> {
    /// Variable bindings resolved by `Variable` nodes.
    pub environment: &'a Environment,
    /// Destination of the diagnostics raised during evaluation.
    pub sink:        &'a dyn DiagnosticSink,
}

impl<'a> Context<'a> {
    #[must_use]
    pub fn new(environment: &'a Environment, sink: &'a dyn DiagnosticSink) -> Self {
        Self { environment,
               sink }
    }

    /// Evaluates an expression tree and returns the resulting number.
    ///
    /// This is the main entry point for evaluation. Children are evaluated
    /// depth-first, left before right, each exactly once, before the parent's
    /// operator is applied. Evaluation is total: undefined variables evaluate
    /// to `0.0` and division by zero to positive infinity, with a diagnostic
    /// reported for each occurrence.
    ///
    /// # Example
    /// ```
    /// use arithtree::{
    ///     ast::Expr,
    ///     interpreter::{environment::Environment, evaluator::core::Context, sink::SilentSink},
    /// };
    ///
    /// let mut environment = Environment::new();
    /// environment.set("x", 4.0);
    ///
    /// let context = Context::new(&environment, &SilentSink);
    /// let expr = Expr::mul(Expr::variable("x"), Expr::constant(2.5));
    ///
    /// assert_eq!(context.eval(&expr), 10.0);
    /// ```
    #[must_use]
    pub fn eval(&self, expr: &Expr) -> f64 {
        match expr {
            Expr::Constant { value } => *value,
            Expr::Variable { name } => self.eval_variable(name),
            Expr::UnaryOp { op, expr } => Self::eval_unary(*op, self.eval(expr)),
            Expr::BinaryOp { left, op, right } => self.eval_binary_op(left, *op, right),
        }
    }

    /// Resolves a variable against the environment.
    ///
    /// A missing binding reports [`Diagnostic::UndefinedVariable`] and yields
    /// [`UNDEFINED_VARIABLE_VALUE`].
    #[must_use]
    pub fn eval_variable(&self, name: &str) -> f64 {
        match self.environment.get(name) {
            Some(value) => value,
            None => {
                self.report(Diagnostic::UndefinedVariable { name: name.to_owned() });
                UNDEFINED_VARIABLE_VALUE
            },
        }
    }

    /// Logs a diagnostic and forwards it to the sink.
    pub fn report(&self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "evaluation diagnostic");
        self.sink.report(&diagnostic);
    }
}
