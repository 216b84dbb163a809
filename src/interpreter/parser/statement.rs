use crate::{
    ast::{Expr, Identifier, Statement},
    interpreter::{
        parser::core::{Parser, Precedence},
        token::{Token, TokenKind},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a single statement starting at the current token.
    ///
    /// Statements are either:
    /// - `let <identifier> = <expression>;`
    /// - `return <expression>;` or `return;`
    /// - `<expression>;`
    ///
    /// The trailing semicolon is optional in every form. On return the
    /// parser is positioned on the statement's last token.
    ///
    /// # Returns
    /// The statement, or `None` if a `let` statement was malformed. The error
    /// has been recorded in that case.
    pub fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => Some(self.parse_return_statement()),
            _ => Some(self.parse_expression_statement()),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        if !self.expect_peek(TokenKind::Identifier) {
            return None;
        }

        let name = Identifier::new(self.current.literal.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Some(Statement::Let { name, value })
    }

    fn parse_return_statement(&mut self) -> Statement {
        // A bare `return` may be closed by `;`, by the enclosing `}` or by the
        // end of input. Only the `;` belongs to this statement.
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
            return Statement::Return { value: None };
        }
        if self.peek_is(TokenKind::RightBrace) || self.peek_is(TokenKind::Eof) {
            return Statement::Return { value: None };
        }

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Statement::Return { value: Some(value) }
    }

    fn parse_expression_statement(&mut self) -> Statement {
        let expr: Expr = self.parse_expression(Precedence::Lowest);
        self.skip_semicolon();

        Statement::Expression(expr)
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }
}
