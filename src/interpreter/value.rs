/// Runtime values.
///
/// Defines the `Value` enum with its type names, truthiness, equality and
/// `inspect` rendering, plus the `Closure` carried by function values.
pub mod core;
/// Lexical environments.
///
/// Defines `Environment`, a frame of name bindings chained to its enclosing
/// frame, and the shared `Env` handle that closures capture.
pub mod environment;
