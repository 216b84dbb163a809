/// Parsing errors.
///
/// Structural and syntactic problems found while building the syntax tree.
/// The parser records these and keeps going, so a single parse can report
/// several of them.
pub mod parse_error;
/// Runtime errors.
///
/// Failures raised while evaluating a program or inside a built-in function,
/// such as type mismatches, unknown identifiers or wrong argument counts.
/// They surface to callers as `Value::Error`.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
