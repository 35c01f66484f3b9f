//! # arithtree
//!
//! arithtree evaluates arithmetic expression trees written in Rust.
//! Trees are built from constants, variable references, unary sign operators
//! and binary arithmetic operators, and are reduced to an `f64` against a
//! caller-owned variable environment.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::Diagnostic,
    interpreter::{
        environment::Environment,
        evaluator::core::Context,
        sink::{CollectingSink, StderrSink},
    },
};

/// Defines the structure of expression trees.
///
/// This module declares the `Expr` enum and the operator types. A tree is
/// built by direct construction and owns all of its nodes.
///
/// # Responsibilities
/// - Defines the node variants and their operators.
/// - Provides constructors, introspection and ownership release of children.
pub mod ast;
/// Provides the diagnostic and error types.
///
/// Evaluation conditions are advisory diagnostics rather than failures; the
/// only true error is a failed self-check case.
pub mod error;
/// Evaluates expression trees.
///
/// This module ties together the variable environment, the evaluator and the
/// diagnostic sinks.
///
/// # Responsibilities
/// - Stores variable bindings.
/// - Reduces trees to numbers with a fixed policy for undefined variables and
///   division by zero.
/// - Routes diagnostics to standard error or to the caller.
pub mod interpreter;
/// Built-in self-check suite.
///
/// A fixed set of trees with known results, run by the command-line
/// `--self-check` flag.
pub mod self_check;

/// Evaluates `expr` against `environment`, writing diagnostics to standard
/// error.
///
/// # Examples
/// ```
/// use arithtree::{ast::Expr, evaluate, interpreter::environment::Environment};
///
/// let mut environment = Environment::new();
/// environment.set("x", 3.0);
///
/// let expr = Expr::add(Expr::variable("x"), Expr::constant(1.0));
/// assert_eq!(evaluate(&expr, &environment), 4.0);
///
/// // Division by zero prints a diagnostic and yields infinity.
/// let expr = Expr::div(Expr::constant(1.0), Expr::constant(0.0));
/// assert_eq!(evaluate(&expr, &environment), f64::INFINITY);
/// ```
#[must_use]
pub fn evaluate(expr: &Expr, environment: &Environment) -> f64 {
    Context::new(environment, &StderrSink).eval(expr)
}

/// Evaluates `expr` against `environment` and returns the diagnostics
/// alongside the result instead of printing them.
///
/// # Examples
/// ```
/// use arithtree::{
///     ast::Expr, error::Diagnostic, evaluate_with_diagnostics,
///     interpreter::environment::Environment,
/// };
///
/// let (value, diagnostics) = evaluate_with_diagnostics(&Expr::variable("y"), &Environment::new());
///
/// assert_eq!(value, 0.0);
/// assert_eq!(diagnostics,
///            vec![Diagnostic::UndefinedVariable { name: "y".to_string() }]);
/// ```
#[must_use]
pub fn evaluate_with_diagnostics(expr: &Expr, environment: &Environment) -> (f64, Vec<Diagnostic>) {
    let sink = CollectingSink::new();
    let value = Context::new(environment, &sink).eval(expr);
    (value, sink.into_diagnostics())
}
