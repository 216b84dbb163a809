use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionLiteral, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        parser::core::{Parser, Precedence},
        token::{Token, TokenKind},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> Expr {
        Expr::Identifier(Identifier::new(self.current.literal.clone()))
    }

    /// Parses an integer literal.
    ///
    /// Literals that do not fit in an `i64` are reported and replaced by
    /// [`Expr::Missing`].
    pub(in crate::interpreter::parser) fn parse_integer_literal(&mut self) -> Expr {
        match self.current.literal.parse::<i64>() {
            Ok(value) => Expr::Integer(value),
            Err(_) => {
                self.record(ParseError::InvalidInteger { literal: self.current.literal.clone() });
                Expr::Missing
            },
        }
    }

    pub(in crate::interpreter::parser) fn parse_string_literal(&mut self) -> Expr {
        Expr::String(self.current.literal.clone())
    }

    pub(in crate::interpreter::parser) fn parse_boolean(&mut self) -> Expr {
        Expr::Boolean(self.current_is(TokenKind::True))
    }

    /// Parses `!<expr>` or `-<expr>`.
    ///
    /// The operand is parsed at prefix precedence, so `-a * b` groups as
    /// `(-a) * b` while `-f(x)` negates the call result.
    pub(in crate::interpreter::parser) fn parse_prefix_expression(&mut self) -> Expr {
        let Some(op) = token_to_prefix_operator(self.current.kind) else {
            self.record(ParseError::NoPrefixParseFn { kind: self.current.kind });
            return Expr::Missing;
        };

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix);

        Expr::Prefix { op,
                       right: Box::new(right) }
    }

    /// Parses `( <expr> )`. Grouping leaves no trace in the tree.
    pub(in crate::interpreter::parser) fn parse_grouped_expression(&mut self) -> Expr {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenKind::RightParen) {
            return Expr::Missing;
        }

        expr
    }

    /// Parses a conditional expression.
    ///
    /// Grammar: `if "(" expr ")" block ( "else" block )?`
    pub(in crate::interpreter::parser) fn parse_if_expression(&mut self) -> Expr {
        if !self.expect_peek(TokenKind::LeftParen) {
            return Expr::Missing;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenKind::RightParen) || !self.expect_peek(TokenKind::LeftBrace) {
            return Expr::Missing;
        }

        let consequence = self.parse_block();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();

            if !self.expect_peek(TokenKind::LeftBrace) {
                return Expr::Missing;
            }

            Some(self.parse_block())
        } else {
            None
        };

        Expr::If { condition: Box::new(condition),
                   consequence,
                   alternative }
    }

    /// Parses a function literal.
    ///
    /// Grammar: `fn "(" ( identifier ( "," identifier )* )? ")" block`
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self) -> Expr {
        if !self.expect_peek(TokenKind::LeftParen) {
            return Expr::Missing;
        }

        let Some(parameters) = self.parse_function_parameters() else {
            return Expr::Missing;
        };

        if !self.expect_peek(TokenKind::LeftBrace) {
            return Expr::Missing;
        }

        let body = self.parse_block();

        Expr::Function(Rc::new(FunctionLiteral { parameters, body }))
    }

    /// Parses `[ e1, e2, ... ]`.
    pub(in crate::interpreter::parser) fn parse_array_literal(&mut self) -> Expr {
        self.parse_expression_list(TokenKind::RightBracket)
            .map_or(Expr::Missing, Expr::Array)
    }
}

/// Maps a token kind to the prefix operator it denotes.
///
/// ## Example
/// ```
/// use macaque::{
///     ast::PrefixOperator,
///     interpreter::{parser::unary::token_to_prefix_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_prefix_operator(TokenKind::Bang), Some(PrefixOperator::Bang));
/// assert_eq!(token_to_prefix_operator(TokenKind::Plus), None);
/// ```
#[must_use]
pub const fn token_to_prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Bang => Some(PrefixOperator::Bang),
        TokenKind::Minus => Some(PrefixOperator::Minus),
        _ => None,
    }
}
