use std::fmt;

use logos::Logos;

/// The kind of a lexical token.
///
/// The lexer derives its matching rules from the attributes on this enum.
/// `Illegal` and `Eof` carry no pattern: the lexer produces them itself for
/// unrecognised input and for the end of the source.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Input the lexer could not recognise.
    Illegal,
    /// End of input.
    Eof,

    /// Variable or function names such as `x` or `new_adder`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Decimal integer literals such as `42`.
    #[regex(r"[0-9]+")]
    Int,
    /// Double-quoted string literals. No escape sequences are processed.
    #[regex(r#""[^"]*""#)]
    String,

    /// `=`
    #[token("=")]
    Assign,
    /// `==`
    #[token("==")]
    Equal,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    LessThan,
    /// `>`
    #[token(">")]
    GreaterThan,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `[`
    #[token("[")]
    LeftBracket,
    /// `]`
    #[token("]")]
    RightBracket,

    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Identifier => "IDENTIFIER",
            Self::Int => "INT",
            Self::String => "STRING",
            Self::Assign => "=",
            Self::Equal => "==",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::NotEqual => "!=",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };
        f.write_str(name)
    }
}

/// A lexical token: its kind together with the source text it was read from.
///
/// For string literals the literal excludes the surrounding quotes; for
/// `Eof` it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What sort of token this is.
    pub kind:    TokenKind,
    /// The text of the token.
    pub literal: String,
}

impl Token {
    /// Creates a token from a kind and its literal text.
    ///
    /// ## Example
    /// ```
    /// use macaque::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Int, "5");
    /// assert_eq!(token.literal, "5");
    /// ```
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self { kind,
               literal: literal.into() }
    }

    /// The end-of-input sentinel.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    /// Returns `true` if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.kind, self.literal)
    }
}
