/// Core parser state and the Pratt expression loop.
///
/// Holds the `Parser` struct with its current and lookahead tokens, the
/// precedence table, the prefix/infix handler lookup and error recording.
pub mod core;

/// Statement parsing.
///
/// `let`, `return` and expression statements, and the program loop.
pub mod statement;

/// Block parsing.
///
/// Brace-delimited statement sequences used by `if` branches and function
/// bodies.
pub mod block;

/// Prefix handlers.
///
/// Everything that can start an expression: identifiers, literals, the `!`
/// and `-` operators, grouping parentheses, `if`, `fn` and array literals.
pub mod unary;

/// Infix handlers.
///
/// Binary operators, call expressions and index expressions, each of which
/// extends an already parsed left-hand side.
pub mod binary;

/// Shared list parsing.
///
/// Comma-separated expression lists and function parameter lists.
pub mod utils;

pub use self::core::{Parser, Precedence, parse};
