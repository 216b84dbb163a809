/// Operator dispatch by operand types.
pub mod core;

/// Integer arithmetic and ordering.
pub mod scalar;

/// String concatenation and equality.
pub mod string;

/// Equality for booleans, null, arrays and functions.
pub mod comparison;
