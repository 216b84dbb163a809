use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        parser::core::Parser,
        token::{Token, TokenKind},
    },
};

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Parses a block delimited by braces.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// Statements are parsed until the closing `}`. If the input ends first,
    /// an error is recorded and the statements read so far are returned.
    ///
    /// # Parameters
    /// - `self`: Parser positioned on the opening `{`.
    ///
    /// # Returns
    /// The block, with the parser positioned on its closing `}` (or on `Eof`
    /// when the block was left open).
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> BlockStatement {
        let mut block = BlockStatement::default();
        self.next_token();

        while !self.current_is(TokenKind::RightBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                block.statements.push(statement);
            }
            self.next_token();
        }

        if self.current_is(TokenKind::Eof) {
            self.record(ParseError::UnexpectedToken { expected: TokenKind::RightBrace,
                                                      found:    self.current.clone(), });
        }

        block
    }
}
