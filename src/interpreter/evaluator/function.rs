/// Built-in function implementations.
///
/// The array and string helpers available in every program: `len`,
/// `first`, `last`, `rest` and `push`.
pub mod builtin;
/// The `puts` function implementation.
///
/// Writes values to standard output.
pub mod print;

pub mod core;
