use crate::interpreter::evaluator::core::Context;

impl Context<'_> {
    /// Evaluates an exponentiation operation with `f64::powf`.
    ///
    /// Real-domain semantics apply: a negative base with a fractional
    /// exponent is NaN, and `0 ^ 0` is `1`. No diagnostic is ever reported.
    ///
    /// # Example
    /// ```
    /// use arithtree::interpreter::evaluator::core::Context;
    ///
    /// assert_eq!(Context::eval_pow(2.0, 3.0), 8.0);
    /// assert_eq!(Context::eval_pow(2.0, -2.0), 0.25);
    /// assert!(Context::eval_pow(-1.0, 0.5).is_nan());
    /// ```
    #[must_use]
    pub fn eval_pow(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::Context;

    #[test]
    fn zero_to_the_zero_is_one() {
        assert_eq!(Context::eval_pow(0.0, 0.0), 1.0);
    }

    #[test]
    fn zero_to_a_negative_power_is_infinite() {
        assert_eq!(Context::eval_pow(0.0, -1.0), f64::INFINITY);
    }

    #[test]
    fn negative_base_with_integral_exponent_is_real() {
        assert_eq!(Context::eval_pow(-2.0, 3.0), -8.0);
    }
}
