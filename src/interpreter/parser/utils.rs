use crate::{
    ast::{Expr, Identifier},
    interpreter::{
        parser::core::{Parser, Precedence},
        token::{Token, TokenKind},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a comma-separated list of expressions closed by `end`.
    ///
    /// Used for call arguments (`end` is `)`) and array literals (`end` is
    /// `]`).
    ///
    /// # Parameters
    /// - `self`: Parser positioned on the opening delimiter.
    /// - `end`: The closing delimiter.
    ///
    /// # Returns
    /// The expressions in source order, or `None` if the closing delimiter
    /// was missing.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                end: TokenKind)
                                                                -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest));
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    /// Parses the parameter list of a function literal.
    ///
    /// Every parameter must be an identifier, and a trailing comma is an
    /// error.
    ///
    /// # Parameters
    /// - `self`: Parser positioned on the opening `(`.
    ///
    /// # Returns
    /// The parameters, with the parser positioned on the closing `)`, or
    /// `None` after recording an error.
    pub(in crate::interpreter::parser) fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RightParen) {
            self.next_token();
            return Some(parameters);
        }

        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }
        parameters.push(Identifier::new(self.current.literal.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();

            if !self.expect_peek(TokenKind::Identifier) {
                return None;
            }
            parameters.push(Identifier::new(self.current.literal.clone()));
        }

        if !self.expect_peek(TokenKind::RightParen) {
            return None;
        }

        Some(parameters)
    }
}
