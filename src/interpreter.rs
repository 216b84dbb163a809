/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks the tree recursively, threading a lexical environment
/// through every step. It implements bindings, closures, function calls,
/// conditionals, early `return` and the built-in catalogue.
///
/// # Responsibilities
/// - Evaluates every statement and expression variant.
/// - Propagates runtime errors outward as soon as they occur.
/// - Bounds the depth of nested function calls.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads raw source text and produces a stream of tokens:
/// identifiers, integer and string literals, keywords, operators and
/// delimiters, followed by a final end-of-input token.
///
/// # Responsibilities
/// - Converts the input character stream into `(kind, literal)` tokens.
/// - Skips whitespace.
/// - Reports unrecognised characters as `ILLEGAL` tokens.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// An operator-precedence (Pratt) parser: every token kind may have a prefix
/// handler, an infix handler, or both, and a precedence table decides how far
/// each infix operator extends the current expression.
///
/// # Responsibilities
/// - Converts tokens into `Program`, `Statement` and `Expr` nodes.
/// - Records structural errors and keeps parsing after each one.
/// - Reproduces the precedence and associativity rules of the language.
pub mod parser;
/// Token kinds and tokens.
///
/// The vocabulary shared by the lexer and the parser.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program computes (integers, strings,
/// booleans, null, arrays, functions, built-ins) and the control markers for
/// `return` and errors, along with the environments functions close over.
///
/// # Responsibilities
/// - Defines the `Value` enum and its rendering and equality rules.
/// - Defines `Environment`, the chained binding table.
pub mod value;
