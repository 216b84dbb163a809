use macaque::interpreter::{
    lexer::{Lexer, tokenize},
    token::{Token, TokenKind},
};
use pretty_assertions::assert_eq;

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source).into_iter()
                    .map(|t| (t.kind, t.literal))
                    .collect()
}

#[test]
fn scans_every_token_kind() {
    let source = r#"let five = 5;
let add = fn(x, y) {
  x + y;
};
!-/*5;
5 < 10 > 5;
if (5 < 10) { return true; } else { return false; }
10 == 10; 10 != 9;
"foo bar"
[1, 2];
"#;

    use TokenKind::*;
    let expected = vec![(Let, "let"),
                        (Identifier, "five"),
                        (Assign, "="),
                        (Int, "5"),
                        (Semicolon, ";"),
                        (Let, "let"),
                        (Identifier, "add"),
                        (Assign, "="),
                        (Function, "fn"),
                        (LeftParen, "("),
                        (Identifier, "x"),
                        (Comma, ","),
                        (Identifier, "y"),
                        (RightParen, ")"),
                        (LeftBrace, "{"),
                        (Identifier, "x"),
                        (Plus, "+"),
                        (Identifier, "y"),
                        (Semicolon, ";"),
                        (RightBrace, "}"),
                        (Semicolon, ";"),
                        (Bang, "!"),
                        (Minus, "-"),
                        (Slash, "/"),
                        (Asterisk, "*"),
                        (Int, "5"),
                        (Semicolon, ";"),
                        (Int, "5"),
                        (LessThan, "<"),
                        (Int, "10"),
                        (GreaterThan, ">"),
                        (Int, "5"),
                        (Semicolon, ";"),
                        (If, "if"),
                        (LeftParen, "("),
                        (Int, "5"),
                        (LessThan, "<"),
                        (Int, "10"),
                        (RightParen, ")"),
                        (LeftBrace, "{"),
                        (Return, "return"),
                        (True, "true"),
                        (Semicolon, ";"),
                        (RightBrace, "}"),
                        (Else, "else"),
                        (LeftBrace, "{"),
                        (Return, "return"),
                        (False, "false"),
                        (Semicolon, ";"),
                        (RightBrace, "}"),
                        (Int, "10"),
                        (Equal, "=="),
                        (Int, "10"),
                        (Semicolon, ";"),
                        (Int, "10"),
                        (NotEqual, "!="),
                        (Int, "9"),
                        (Semicolon, ";"),
                        (String, "foo bar"),
                        (LeftBracket, "["),
                        (Int, "1"),
                        (Comma, ","),
                        (Int, "2"),
                        (RightBracket, "]"),
                        (Semicolon, ";"),
                        (Eof, "")];

    let expected: Vec<(TokenKind, std::string::String)> =
        expected.into_iter()
                .map(|(kind, literal)| (kind, literal.to_string()))
                .collect();

    assert_eq!(kinds_and_literals(source), expected);
}

#[test]
fn keywords_win_over_identifiers_but_not_over_longer_names() {
    assert_eq!(kinds_and_literals("fn fnord letter let"),
               vec![(TokenKind::Function, "fn".to_string()),
                    (TokenKind::Identifier, "fnord".to_string()),
                    (TokenKind::Identifier, "letter".to_string()),
                    (TokenKind::Let, "let".to_string()),
                    (TokenKind::Eof, String::new())]);
}

#[test]
fn identifiers_may_contain_underscores_and_digits() {
    let tokens = tokenize("_private snake_case x1");

    assert!(tokens[..3].iter().all(|t| t.is(TokenKind::Identifier)));
    assert_eq!(tokens[2].literal, "x1");
}

#[test]
fn strings_keep_inner_whitespace_and_drop_quotes() {
    let tokens = tokenize(r#""  spaced  out  " """#);

    assert_eq!(tokens[0], Token::new(TokenKind::String, "  spaced  out  "));
    assert_eq!(tokens[1], Token::new(TokenKind::String, ""));
}

#[test]
fn unknown_characters_are_illegal_tokens() {
    let tokens = tokenize("1 @ 2");

    assert_eq!(tokens[1], Token::new(TokenKind::Illegal, "@"));
    assert_eq!(tokens[2], Token::new(TokenKind::Int, "2"));
}

#[test]
fn next_token_keeps_returning_eof() {
    let mut lexer = Lexer::new("x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::eof());
    }
}

#[test]
fn iterator_stops_after_a_single_eof() {
    let tokens: Vec<Token> = Lexer::new("").collect();
    assert_eq!(tokens, vec![Token::eof()]);
}

#[test]
fn tokens_display_with_kind_and_literal() {
    assert_eq!(Token::new(TokenKind::Identifier, "foo").to_string(), "{IDENTIFIER foo}");
    assert_eq!(Token::new(TokenKind::NotEqual, "!=").to_string(), "{!= !=}");
    assert_eq!(TokenKind::Function.to_string(), "FUNCTION");
}
