/// The environment module stores variable bindings.
///
/// The environment is a mutable mapping from variable name to value. It is
/// owned by the caller, populated before evaluation and borrowed by the
/// evaluator for the duration of a call.
///
/// # Responsibilities
/// - Inserts, overwrites and removes bindings.
/// - Answers lookups without side effects.
pub mod environment;
/// The evaluator module reduces expression trees to numbers.
///
/// The evaluator traverses the tree depth-first, evaluates each operand
/// exactly once and combines the results with the node's operator.
///
/// # Responsibilities
/// - Evaluates every node variant.
/// - Substitutes sentinel values for undefined variables and division by
///   zero.
/// - Reports those conditions through a diagnostic sink.
pub mod evaluator;
/// The sink module routes diagnostics to their destination.
///
/// Evaluation never fails; the conditions it detects are handed to a
/// [`sink::DiagnosticSink`], which decides whether they are printed,
/// collected or discarded.
pub mod sink;
