//! # macaque
//!
//! macaque is an interpreter for Monkey, a small dynamically typed,
//! expression-oriented language, written in Rust.
//! It scans, parses and evaluates programs with support for integers,
//! strings, arrays, first-class functions, closures and a handful of
//! built-in functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{EvalConfig, Evaluator},
        parser::Parser,
        value::{
            core::Value,
            environment::{Env, Environment},
        },
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Renders every node in a canonical, fully parenthesised form, which is
///   what parser tests compare against.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors that can be raised while parsing or
/// evaluating code. Parse errors are collected by the parser; runtime errors
/// stop evaluation and surface as error values.
///
/// # Responsibilities
/// - Defines error enums for both failure modes.
/// - Produces the exact messages shown to users.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Helpers used by more than one phase of the interpreter.
pub mod util;

/// Parses and evaluates `source` in `env`.
///
/// Bindings made by the program stay in `env`, so a REPL can pass the same
/// environment for every line.
///
/// # Errors
/// Returns every parse error if the source does not parse. Nothing is
/// evaluated in that case. Runtime failures are not errors here; they come
/// back as `Ok(Value::Error(..))`.
///
/// # Examples
/// ```
/// use macaque::{
///     interpreter::{evaluator::core::EvalConfig, value::environment::Environment},
///     run,
/// };
///
/// let env = Environment::new().into_shared();
/// let config = EvalConfig::default();
///
/// run("let x = 5;", &env, &config).unwrap();
/// assert_eq!(run("x * 2", &env, &config).unwrap().inspect(), "10");
///
/// let errors = run("let = 1;", &env, &config).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
pub fn run(source: &str, env: &Env, config: &EvalConfig) -> Result<Value, Vec<ParseError>> {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        return Err(parser.into_errors());
    }

    Ok(Evaluator::new(*config).evaluate(&program, env))
}

/// Parses and evaluates `source` in a fresh environment with default
/// settings.
///
/// # Examples
/// ```
/// use macaque::evaluate_source;
///
/// let value = evaluate_source("let f = fn(x) { if (x > 5) { return x } }; f(11)").unwrap();
/// assert_eq!(value.inspect(), "11");
///
/// let value = evaluate_source("nonExistentVariable;").unwrap();
/// assert_eq!(value.inspect(), "ERROR: identifier not found: nonExistentVariable");
/// ```
pub fn evaluate_source(source: &str) -> Result<Value, Vec<ParseError>> {
    run(source, &Environment::new().into_shared(), &EvalConfig::default())
}
