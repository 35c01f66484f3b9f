use crate::{
    ast::BinaryOperator,
    error::Diagnostic,
    interpreter::evaluator::core::{Context, DIVISION_BY_ZERO_VALUE},
};

impl Context<'_> {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Plain IEEE-754 arithmetic: overflow silently produces infinity and
    /// invalid operations produce NaN. The only checked case is a divisor
    /// equal to zero (either sign), which reports
    /// [`Diagnostic::DivisionByZero`] and yields positive infinity whatever
    /// the dividend. The operator must be one of `Add`, `Subtract`,
    /// `Multiply` or `Divide`; `Power` is handled by `eval_pow`.
    ///
    /// # Example
    /// ```
    /// use arithtree::{
    ///     ast::BinaryOperator,
    ///     interpreter::{environment::Environment, evaluator::core::Context, sink::SilentSink},
    /// };
    ///
    /// let environment = Environment::new();
    /// let context = Context::new(&environment, &SilentSink);
    ///
    /// assert_eq!(context.eval_scalar_op(BinaryOperator::Multiply, 1.5, 2.0), 3.0);
    /// assert_eq!(context.eval_scalar_op(BinaryOperator::Divide, -1.0, 0.0), f64::INFINITY);
    /// ```
    #[must_use]
    pub fn eval_scalar_op(&self, op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{Add, Divide, Multiply, Power, Subtract};

        match op {
            Add => left + right,
            Subtract => left - right,
            Multiply => left * right,
            Divide => {
                if right == 0.0 {
                    self.report(Diagnostic::DivisionByZero);
                    return DIVISION_BY_ZERO_VALUE;
                }
                left / right
            },
            Power => unreachable!("power is evaluated by eval_pow"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::BinaryOperator,
        error::Diagnostic,
        interpreter::{
            environment::Environment, evaluator::core::Context, sink::CollectingSink,
        },
    };

    #[test]
    fn negative_zero_divisor_is_division_by_zero() {
        let environment = Environment::new();
        let sink = CollectingSink::new();
        let context = Context::new(&environment, &sink);

        assert_eq!(context.eval_scalar_op(BinaryOperator::Divide, 1.0, -0.0), f64::INFINITY);
        assert_eq!(sink.into_diagnostics(), vec![Diagnostic::DivisionByZero]);
    }

    #[test]
    fn nan_divisor_is_not_zero() {
        let environment = Environment::new();
        let sink = CollectingSink::new();
        let context = Context::new(&environment, &sink);

        assert!(context.eval_scalar_op(BinaryOperator::Divide, 1.0, f64::NAN).is_nan());
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn overflow_is_silent() {
        let environment = Environment::new();
        let sink = CollectingSink::new();
        let context = Context::new(&environment, &sink);

        assert_eq!(context.eval_scalar_op(BinaryOperator::Multiply, f64::MAX, 2.0),
                   f64::INFINITY);
        assert!(context.eval_scalar_op(BinaryOperator::Subtract, f64::INFINITY, f64::INFINITY)
                       .is_nan());
        assert!(sink.diagnostics().is_empty());
    }
}
