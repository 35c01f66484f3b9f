use arithtree::{
    ast::{BinaryOperator, Expr},
    evaluate_with_diagnostics,
    interpreter::environment::Environment,
};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = Expr> {
    prop_oneof![any::<f64>().prop_map(Expr::constant),
                prop::sample::select(vec!["a", "b", "c", "unbound"]).prop_map(Expr::variable)]
}

fn tree() -> impl Strategy<Value = Expr> {
    leaf().prop_recursive(6, 64, 2, |inner| {
              prop_oneof![inner.clone().prop_map(Expr::plus),
                          inner.clone().prop_map(Expr::minus),
                          (inner.clone(),
                           prop::sample::select(vec![BinaryOperator::Add,
                                                     BinaryOperator::Subtract,
                                                     BinaryOperator::Multiply,
                                                     BinaryOperator::Divide,
                                                     BinaryOperator::Power]),
                           inner).prop_map(|(l, op, r)| Expr::binary(l, op, r))]
          })
}

fn environment() -> impl Strategy<Value = Environment> {
    (any::<f64>(), any::<f64>(), any::<f64>()).prop_map(|(a, b, c)| {
                                                  [("a", a), ("b", b), ("c", c)].into_iter()
                                                                                .collect::<Environment>()
                                              })
}

fn same(left: f64, right: f64) -> bool {
    (left.is_nan() && right.is_nan()) || left.to_bits() == right.to_bits()
}

fn eval(expr: &Expr, environment: &Environment) -> f64 {
    evaluate_with_diagnostics(expr, environment).0
}

proptest! {
    #[test]
    fn constant_evaluates_to_itself(value in any::<f64>()) {
        prop_assert!(same(eval(&Expr::constant(value), &Environment::new()), value));
    }

    #[test]
    fn unary_plus_is_identity_and_minus_negates(expr in tree(), environment in environment()) {
        let value = eval(&expr, &environment);

        prop_assert!(same(eval(&Expr::plus(expr.clone()), &environment), value));
        prop_assert!(same(eval(&Expr::minus(expr), &environment), -value));
    }

    #[test]
    fn add_subtract_multiply_match_float_arithmetic(l in tree(), r in tree(), environment in environment()) {
        let (lv, rv) = (eval(&l, &environment), eval(&r, &environment));

        prop_assert!(same(eval(&Expr::add(l.clone(), r.clone()), &environment), lv + rv));
        prop_assert!(same(eval(&Expr::sub(l.clone(), r.clone()), &environment), lv - rv));
        prop_assert!(same(eval(&Expr::mul(l, r), &environment), lv * rv));
    }

    #[test]
    fn divide_matches_float_division_unless_divisor_is_zero(l in tree(), r in tree(), environment in environment()) {
        let (lv, rv) = (eval(&l, &environment), eval(&r, &environment));
        let expected = if rv == 0.0 { f64::INFINITY } else { lv / rv };

        prop_assert!(same(eval(&Expr::div(l, r), &environment), expected));
    }

    #[test]
    fn power_matches_powf(l in tree(), r in tree(), environment in environment()) {
        let (lv, rv) = (eval(&l, &environment), eval(&r, &environment));

        prop_assert!(same(eval(&Expr::pow(l, r), &environment), lv.powf(rv)));
    }

    #[test]
    fn evaluation_is_idempotent(expr in tree(), environment in environment()) {
        let snapshot = expr.clone();
        let (first, first_diagnostics) = evaluate_with_diagnostics(&expr, &environment);
        let (second, second_diagnostics) = evaluate_with_diagnostics(&expr, &environment);

        prop_assert!(same(first, second));
        prop_assert_eq!(first_diagnostics, second_diagnostics);
        prop_assert_eq!(expr.to_string(), snapshot.to_string());
    }
}
