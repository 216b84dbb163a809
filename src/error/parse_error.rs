use thiserror::Error;

use crate::interpreter::token::{Token, TokenKind};

/// Represents all errors that can occur while parsing.
///
/// None of them stop the parser: each is recorded and parsing resumes at the
/// next token, so the parse as a whole always produces a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The next token did not have the kind the grammar requires here.
    #[error("expected next token to be {expected}, got {} instead", .found.kind)]
    UnexpectedToken {
        /// The kind that was required.
        expected: TokenKind,
        /// The token actually found.
        found:    Token,
    },
    /// A token that cannot begin an expression appeared where one was
    /// expected.
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn {
        /// Kind of the offending token.
        kind: TokenKind,
    },
    /// An integer literal does not fit in 64 signed bits.
    #[error("could not parse {literal:?} as integer")]
    InvalidInteger {
        /// The literal text.
        literal: String,
    },
}
