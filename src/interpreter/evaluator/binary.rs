/// Dispatch of binary operators and operand evaluation order.
pub mod core;
/// Power operator.
pub mod power;
/// Add, subtract, multiply and divide.
pub mod scalar;
