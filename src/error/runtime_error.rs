use thiserror::Error;

use crate::ast::{InfixOperator, PrefixOperator};

/// Represents all errors that can occur during evaluation.
///
/// Type names in the messages are the runtime names reported by
/// `Value::type_name`, such as `INTEGER` or `ARRAY`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The operands of a binary operator have different types.
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        /// Type of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type of the right operand.
        right: &'static str,
    },
    /// A prefix operator was applied to a type it does not support.
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefixOperator {
        /// The operator.
        op:      PrefixOperator,
        /// Type of the operand.
        operand: &'static str,
    },
    /// A binary operator was applied to a pair of types it does not support.
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfixOperator {
        /// Type of the left operand.
        left:  &'static str,
        /// The operator.
        op:    InfixOperator,
        /// Type of the right operand.
        right: &'static str,
    },
    /// A name is bound neither in scope nor as a built-in.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// Something other than a function was called.
    #[error("not a function: {type_name}")]
    NotAFunction {
        /// Type of the callee.
        type_name: &'static str,
    },
    /// The index operator was applied to an unsupported pair of types.
    #[error("index operator not available with value {collection} and index {index}")]
    IndexNotSupported {
        /// Type of the indexed value.
        collection: &'static str,
        /// Type of the index.
        index:      &'static str,
    },
    /// A function or built-in received the wrong number of arguments.
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount {
        /// Number of arguments supplied.
        got:  usize,
        /// Number of arguments expected.
        want: usize,
    },
    /// A built-in does not accept an argument of this type.
    #[error("argument to `{function}` not supported, got {got}")]
    UnsupportedArgument {
        /// Name of the built-in.
        function: &'static str,
        /// Type of the offending argument.
        got:      &'static str,
    },
    /// The first argument of a built-in must have a specific type.
    #[error("first argument to `{function}` must be {expected}, got {got}")]
    FirstArgumentMustBe {
        /// Name of the built-in.
        function: &'static str,
        /// Required type.
        expected: &'static str,
        /// Type actually supplied.
        got:      &'static str,
    },
    /// Integer division with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
    /// Nested function calls went deeper than the configured limit.
    #[error("maximum call depth of {limit} exceeded")]
    CallDepthExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// Evaluation reached a subtree the parser could not build.
    #[error("cannot evaluate an expression that failed to parse")]
    MissingExpression,
}
