use tracing::{error, info};

use crate::{
    ast::Expr,
    error::{Diagnostic, SelfCheckError},
    interpreter::{environment::Environment, evaluator::core::Context, sink::CollectingSink},
};

/// A single self-check case: bindings, a tree and the expected outcome.
#[derive(Debug, Clone)]
pub struct Case {
    /// Short identifier printed in reports.
    pub name:        &'static str,
    /// Bindings in effect while the tree is evaluated.
    pub environment: Environment,
    /// The tree to evaluate.
    pub expr:        Expr,
    /// Expected result. A NaN expectation matches any NaN.
    pub expected:    f64,
    /// Diagnostics the evaluation must report, in order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Case {
    fn new(name: &'static str, expr: Expr, expected: f64) -> Self {
        Self { name,
               environment: Environment::new(),
               expr,
               expected,
               diagnostics: Vec::new() }
    }

    fn with_bindings(mut self, bindings: &[(&str, f64)]) -> Self {
        self.environment.extend(bindings.iter().copied());
        self
    }

    fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Evaluates the case and compares value and diagnostics.
    ///
    /// # Errors
    /// Returns a [`SelfCheckError`] describing the first mismatch.
    pub fn run(&self) -> Result<f64, SelfCheckError> {
        let sink = CollectingSink::new();
        let found = Context::new(&self.environment, &sink).eval(&self.expr);

        let matches = if self.expected.is_nan() {
            found.is_nan()
        } else {
            found == self.expected
        };
        if !matches {
            return Err(SelfCheckError::WrongValue { case: self.name,
                                                    expr: self.expr.to_string(),
                                                    expected: self.expected,
                                                    found });
        }

        let reported = sink.into_diagnostics();
        if reported != self.diagnostics {
            return Err(SelfCheckError::WrongDiagnostics { case:     self.name,
                                                          expected: self.diagnostics.clone(),
                                                          found:    reported, });
        }
        Ok(found)
    }
}

/// The bindings and tree of the demo: `-Num1 + 2 * (4 - Num2)` with
/// `Num1 = 3` and `Num2 = 7`, which evaluates to `-9`.
#[must_use]
pub fn demo() -> (Environment, Expr) {
    let environment = [("Num1", 3.0), ("Num2", 7.0)].into_iter().collect();
    let expr = Expr::add(Expr::minus(Expr::variable("Num1")),
                         Expr::mul(Expr::constant(2.0),
                                   Expr::sub(Expr::constant(4.0), Expr::variable("Num2"))));
    (environment, expr)
}

/// The built-in self-check suite.
#[must_use]
pub fn cases() -> Vec<Case> {
    let c = Expr::constant;
    let v = Expr::variable;
    let (demo_environment, demo_expr) = demo();

    vec![Case::new("constant", c(42.5), 42.5),
         Case::new("unary_plus", Expr::plus(c(-3.0)), -3.0),
         Case::new("unary_minus", Expr::minus(v("x")), -3.0).with_bindings(&[("x", 3.0)]),
         Case::new("add", Expr::add(c(1.5), c(2.25)), 3.75),
         Case::new("subtract", Expr::sub(c(1.0), c(4.0)), -3.0),
         Case::new("multiply", Expr::mul(c(-2.0), c(8.0)), -16.0),
         Case::new("divide", Expr::div(c(7.0), c(2.0)), 3.5),
         Case::new("division_by_zero", Expr::div(c(1.0), c(0.0)), f64::INFINITY)
             .with_diagnostics(vec![Diagnostic::DivisionByZero]),
         Case::new("undefined_variable", v("x"), 0.0)
             .with_diagnostics(vec![Diagnostic::UndefinedVariable { name: "x".to_string() }]),
         Case::new("composite",
                   Expr::div(Expr::mul(c(2.0), Expr::add(v("a"), v("b"))),
                             Expr::pow(Expr::sub(v("c"), c(1.0)), Expr::add(v("d"), c(1.0)))),
                   0.125).with_bindings(&[("a", 3.0), ("b", 1.0), ("c", 5.0), ("d", 2.0)]),
         Case::new("power_negative_base_fractional_exponent",
                   Expr::pow(c(-1.0), c(0.5)),
                   f64::NAN),
         Case::new("power_zero_zero", Expr::pow(c(0.0), c(0.0)), 1.0),
         Case { name:        "demo",
                environment: demo_environment,
                expr:        demo_expr,
                expected:    -9.0,
                diagnostics: Vec::new(), }]
}

/// Runs every case and returns the failures.
///
/// Each case is logged as it completes.
#[must_use]
pub fn run() -> Vec<SelfCheckError> {
    cases().iter()
           .filter_map(|case| match case.run() {
               Ok(value) => {
                   info!(case = case.name, value, "self-check passed");
                   None
               },
               Err(e) => {
                   error!(case = case.name, "{e}");
                   Some(e)
               },
           })
           .collect()
}
