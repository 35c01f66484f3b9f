/// Evaluation diagnostics.
///
/// Defines the advisory conditions that evaluation can detect: references to
/// undefined variables and division by zero. Neither aborts evaluation; each
/// is reported through a diagnostic sink and replaced by a sentinel value.
pub mod diagnostic;
/// Self-check failures.
///
/// Contains the error reported when a case of the built-in self-check suite
/// produces a value different from the expected one.
pub mod self_check_error;

pub use diagnostic::Diagnostic;
pub use self_check_error::SelfCheckError;
