use crate::{ast::UnaryOperator, interpreter::evaluator::core::Context};

impl Context<'_> {
    /// Applies a unary sign operator to an evaluated operand.
    ///
    /// `Plus` is the identity, including for NaN and signed zeros. `Minus`
    /// flips the sign bit, so `-(0.0)` is `-0.0`.
    ///
    /// # Example
    /// ```
    /// use arithtree::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Minus, 5.0), -5.0);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Plus, -5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Minus => -value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minus_flips_sign_of_zero_and_infinity() {
        assert!(Context::eval_unary(UnaryOperator::Minus, 0.0).is_sign_negative());
        assert_eq!(Context::eval_unary(UnaryOperator::Minus, f64::INFINITY),
                   f64::NEG_INFINITY);
    }

    #[test]
    fn plus_keeps_nan() {
        assert!(Context::eval_unary(UnaryOperator::Plus, f64::NAN).is_nan());
    }
}
