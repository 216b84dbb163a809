use std::mem;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
    util::stack::ensure_sufficient_stack,
};

/// A handler for a token that starts an expression.
///
/// Called with the parser positioned on that token.
pub type PrefixParseFn<I> = fn(&mut Parser<I>) -> Expr;

/// A handler for a token that continues an expression.
///
/// Called with the parser positioned on that token and the expression parsed
/// so far as its left operand.
pub type InfixParseFn<I> = fn(&mut Parser<I>, Expr) -> Expr;

/// Binding strength of operators, from weakest to strongest.
///
/// The derived ordering is the precedence order. An infix operator extends
/// the expression being parsed only if its precedence is strictly greater
/// than the precedence the caller is parsing at, which makes all binary
/// operators left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything binds tighter than this.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `!` and `-`
    Prefix,
    /// Call `(`
    Call,
    /// Index `[`
    Index,
}

impl Precedence {
    /// Precedence of `kind` when it appears in infix position.
    ///
    /// ## Example
    /// ```
    /// use macaque::interpreter::{parser::Precedence, token::TokenKind};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Equal | TokenKind::NotEqual => Self::Equals,
            TokenKind::LessThan | TokenKind::GreaterThan => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LeftParen => Self::Call,
            TokenKind::LeftBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

/// An operator-precedence parser over a stream of tokens.
///
/// The parser always looks at two tokens: `current`, the token being
/// handled, and `peek`, the one after it. An exhausted stream reads as an
/// endless run of `Eof` tokens.
///
/// Errors never stop the parse. Each one is recorded, the malformed part of
/// the tree is replaced by [`Expr::Missing`] (or the statement is dropped),
/// and parsing resumes at the next token. Callers should check
/// [`Parser::errors`] before evaluating the resulting program.
///
/// ## Example
/// ```
/// use macaque::interpreter::{lexer::Lexer, parser::Parser};
///
/// let mut parser = Parser::new(Lexer::new("-a * b"));
/// let program = parser.parse_program();
///
/// assert!(parser.errors().is_empty());
/// assert_eq!(program.to_string(), "((-a) * b)");
/// ```
pub struct Parser<I: Iterator<Item = Token>> {
    tokens:                                    I,
    pub(in crate::interpreter::parser) current: Token,
    pub(in crate::interpreter::parser) peek:    Token,
    errors:                                    Vec<ParseError>,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    /// Creates a parser over `tokens`, reading the first two tokens.
    pub fn new<T>(tokens: T) -> Self
        where T: IntoIterator<Item = Token, IntoIter = I>
    {
        let mut tokens = tokens.into_iter();
        let current = tokens.next().unwrap_or_else(Token::eof);
        let peek = tokens.next().unwrap_or_else(Token::eof);

        Self { tokens,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Errors recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its recorded errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Parses the whole token stream into a program.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        debug!(statements = program.statements.len(),
               errors = self.errors.len(),
               "parsed program");
        program
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The parser must be positioned on the expression's first token. On
    /// return it is positioned on the expression's last token.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Expr {
        ensure_sufficient_stack(|| {
            let Some(prefix) = Self::prefix_parse_fn(self.current.kind) else {
                self.record(ParseError::NoPrefixParseFn { kind: self.current.kind });
                return Expr::Missing;
            };

            let mut left = prefix(self);

            while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
                let Some(infix) = Self::infix_parse_fn(self.peek.kind) else {
                    return left;
                };

                self.next_token();
                left = infix(self, left);
            }

            left
        })
    }

    /// The prefix handler registered for `kind`, if any.
    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<I>> {
        match kind {
            TokenKind::Identifier => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::String => Some(Self::parse_string_literal),
            TokenKind::True | TokenKind::False => Some(Self::parse_boolean),
            TokenKind::Bang | TokenKind::Minus => Some(Self::parse_prefix_expression),
            TokenKind::LeftParen => Some(Self::parse_grouped_expression),
            TokenKind::If => Some(Self::parse_if_expression),
            TokenKind::Function => Some(Self::parse_function_literal),
            TokenKind::LeftBracket => Some(Self::parse_array_literal),
            _ => None,
        }
    }

    /// The infix handler registered for `kind`, if any.
    fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<I>> {
        match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Equal
            | TokenKind::NotEqual
            | TokenKind::LessThan
            | TokenKind::GreaterThan => Some(Self::parse_infix_expression),
            TokenKind::LeftParen => Some(Self::parse_call_expression),
            TokenKind::LeftBracket => Some(Self::parse_index_expression),
            _ => None,
        }
    }

    /// Advances by one token.
    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        let next = self.tokens.next().unwrap_or_else(Token::eof);
        self.current = mem::replace(&mut self.peek, next);
    }

    pub(in crate::interpreter::parser) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances if the lookahead has kind `kind`; otherwise records an
    /// error and stays put.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.record(ParseError::UnexpectedToken { expected: kind,
                                                      found:    self.peek.clone(), });
            false
        }
    }

    pub(in crate::interpreter::parser) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(in crate::interpreter::parser) const fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    pub(in crate::interpreter::parser) fn record(&mut self, error: ParseError) {
        debug!(%error, "parse error");
        self.errors.push(error);
    }
}

impl<'src> Parser<Lexer<'src>> {
    /// Creates a parser that scans `source` on demand.
    #[must_use]
    pub fn from_source(source: &'src str) -> Self {
        Self::new(Lexer::new(source))
    }
}

/// Parses `source`, returning the program together with any errors.
///
/// ## Example
/// ```
/// use macaque::interpreter::parser::parse;
///
/// let (program, errors) = parse("let x = 1 + 2 * 3;");
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
///
/// let (_, errors) = parse("let = 5;");
/// assert_eq!(errors[0].to_string(), "expected next token to be IDENTIFIER, got = instead");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();
    (program, parser.into_errors())
}
