#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the conditions reported while evaluating a tree.
///
/// Diagnostics are advisory: the evaluator substitutes a sentinel value for
/// the offending subtree and keeps going.
pub enum Diagnostic {
    /// A variable was not bound in the environment. Evaluates to `0.0`.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// The divisor evaluated to zero. Evaluates to positive infinity.
    DivisionByZero,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Error: Undefined variable '{name}'.")
            },
            Self::DivisionByZero => write!(f, "Error: Division by zero."),
        }
    }
}

impl std::error::Error for Diagnostic {}
