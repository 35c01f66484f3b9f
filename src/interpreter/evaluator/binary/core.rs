use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::Context,
};

impl Context<'_> {
    /// Evaluates both operands of a binary node and combines them.
    ///
    /// The left operand is evaluated first, then the right one, and each is
    /// evaluated exactly once. Division checks the already computed divisor
    /// rather than evaluating the right operand again, so the diagnostics of
    /// both operands are reported once and in source order.
    #[must_use]
    pub fn eval_binary_op(&self, left: &Expr, op: BinaryOperator, right: &Expr) -> f64 {
        let left = self.eval(left);
        let right = self.eval(right);
        self.eval_binary(op, left, right)
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// Addition, subtraction, multiplication and division are routed to
    /// `eval_scalar_op`, exponentiation to `eval_pow`.
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
    /// assert_eq!(context.eval_binary(BinaryOperator::Subtract, 3.0, 4.0), -1.0);
    /// assert_eq!(context.eval_binary(BinaryOperator::Power, 2.0, 10.0), 1024.0);
    /// ```
    #[must_use]
    pub fn eval_binary(&self, op: BinaryOperator, left: f64, right: f64) -> f64 {
        use BinaryOperator::{Add, Divide, Multiply, Power, Subtract};

        match op {
            Add | Subtract | Multiply | Divide => self.eval_scalar_op(op, left, right),
            Power => Self::eval_pow(left, right),
        }
    }
}
