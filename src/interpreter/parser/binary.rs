use crate::{
    ast::{Expr, InfixOperator},
    error::ParseError,
    interpreter::{
        parser::core::{Parser, Precedence},
        token::{Token, TokenKind},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses the right-hand side of a binary operator.
    ///
    /// The right operand is parsed at the operator's own precedence, so an
    /// operator of equal strength that follows ends it. This groups
    /// `a - b - c` as `((a - b) - c)`.
    ///
    /// # Parameters
    /// - `left`: The already parsed left operand.
    ///
    /// # Returns
    /// An `Expr::Infix` node.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self, left: Expr) -> Expr {
        let Some(op) = token_to_infix_operator(self.current.kind) else {
            self.record(ParseError::NoPrefixParseFn { kind: self.current.kind });
            return Expr::Missing;
        };

        let precedence = self.current_precedence();
        self.next_token();
        let right = self.parse_expression(precedence);

        Expr::Infix { left: Box::new(left),
                      op,
                      right: Box::new(right) }
    }

    /// Parses the argument list of a call whose callee is `function`.
    pub(in crate::interpreter::parser) fn parse_call_expression(&mut self, function: Expr) -> Expr {
        let Some(arguments) = self.parse_expression_list(TokenKind::RightParen) else {
            return Expr::Missing;
        };

        Expr::Call { function: Box::new(function),
                     arguments }
    }

    /// Parses `[ <index> ]` after the collection expression `left`.
    pub(in crate::interpreter::parser) fn parse_index_expression(&mut self, left: Expr) -> Expr {
        self.next_token();
        let index = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenKind::RightBracket) {
            return Expr::Missing;
        }

        Expr::Index { left:  Box::new(left),
                      index: Box::new(index), }
    }
}

/// Maps a token kind to the binary operator it denotes.
///
/// ## Example
/// ```
/// use macaque::{
///     ast::InfixOperator,
///     interpreter::{parser::binary::token_to_infix_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_infix_operator(TokenKind::NotEqual), Some(InfixOperator::NotEqual));
/// assert_eq!(token_to_infix_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Plus),
        TokenKind::Minus => Some(InfixOperator::Minus),
        TokenKind::Asterisk => Some(InfixOperator::Multiply),
        TokenKind::Slash => Some(InfixOperator::Divide),
        TokenKind::LessThan => Some(InfixOperator::LessThan),
        TokenKind::GreaterThan => Some(InfixOperator::GreaterThan),
        TokenKind::Equal => Some(InfixOperator::Equal),
        TokenKind::NotEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}
