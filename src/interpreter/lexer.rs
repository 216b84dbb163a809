use logos::Logos;

use crate::interpreter::token::{Token, TokenKind};

/// A pull-based scanner turning source text into [`Token`]s.
///
/// The matching rules live on [`TokenKind`]; this type adapts the logos
/// lexer to the `next_token` interface the parser consumes. Unrecognised
/// input becomes an `Illegal` token carrying the offending text, and once
/// the source is exhausted every further call yields `Eof`.
///
/// `Lexer` is also an [`Iterator`] that yields every token up to and
/// including a single `Eof`.
///
/// ## Example
/// ```
/// use macaque::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let kinds: Vec<TokenKind> = Lexer::new("let x = 5;").map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Let,
///                 TokenKind::Identifier,
///                 TokenKind::Assign,
///                 TokenKind::Int,
///                 TokenKind::Semicolon,
///                 TokenKind::Eof]);
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    TokenKind::lexer(source),
               finished: false, }
    }

    /// Scans and returns the next token.
    ///
    /// Returns `Eof` once the input is exhausted, and keeps returning it on
    /// every later call.
    pub fn next_token(&mut self) -> Token {
        match self.inner.next() {
            Some(Ok(TokenKind::String)) => {
                let slice = self.inner.slice();
                Token::new(TokenKind::String, &slice[1..slice.len() - 1])
            },
            Some(Ok(kind)) => Token::new(kind, self.inner.slice()),
            Some(Err(())) => Token::new(TokenKind::Illegal, self.inner.slice()),
            None => Token::eof(),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

/// Scans the whole of `source` into a vector of tokens ending with `Eof`.
///
/// ## Example
/// ```
/// use macaque::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let tokens = tokenize("\"hi\"");
///
/// assert_eq!(tokens[0].kind, TokenKind::String);
/// assert_eq!(tokens[0].literal, "hi");
/// assert_eq!(tokens[1].kind, TokenKind::Eof);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
