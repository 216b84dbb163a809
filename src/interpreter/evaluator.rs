/// Binary operator evaluation logic.
///
/// Handles every infix operator: integer arithmetic and ordering, string
/// concatenation and equality for the remaining value types.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements truthiness negation (`!`) and integer negation (`-`).
pub mod unary;

/// Core evaluation logic and evaluator state.
///
/// Contains the evaluation engine, its configuration, the call depth
/// counter, and the conversion of runtime errors into error values at the
/// public boundary.
pub mod core;

/// Evaluation of index expressions.
///
/// Array element access by integer position.
pub mod index;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the evaluator and the built-ins.
pub mod utils;

/// Function evaluation.
///
/// Handles calls to user-defined closures and built-in functions, argument
/// checking, and return value unwrapping.
pub mod function;

pub use self::core::{EvalConfig, EvalResult, Evaluator, Node, evaluate};
