//! Integration tests for the lexer front end.
//!
//! These tests drive the public API the way an external consumer (a
//! future parser, or the token-dump driver) would: construct a reader
//! over a character source, pull tokens lazily, and check the produced
//! stream.

use cclex::lexer::lexer::{tokenize, Tokenizer};
use cclex::lexer::tokens::{Token, TokenKind};
use cclex::reader::reader::PeekableReader;

#[test]
fn test_lex_small_program() {
    let source = r#"
        int main() {
            int x;
            if (x) {
                return x;
            }
            return y;
        }
    "#;
    let tokens = tokenize(source);

    let expected = [
        (TokenKind::Keyword, "int"),
        (TokenKind::Identifier, "main"),
        (TokenKind::Punctuation, "("),
        (TokenKind::Punctuation, ")"),
        (TokenKind::Punctuation, "{"),
        (TokenKind::Keyword, "int"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Punctuation, ";"),
        (TokenKind::Keyword, "if"),
        (TokenKind::Punctuation, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Punctuation, ")"),
        (TokenKind::Punctuation, "{"),
        (TokenKind::Keyword, "return"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Punctuation, ";"),
        (TokenKind::Punctuation, "}"),
        (TokenKind::Keyword, "return"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Punctuation, ";"),
        (TokenKind::Punctuation, "}"),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value)) in tokens.iter().zip(expected) {
        assert_eq!(token, &Token::new(kind, value));
    }
}

#[test]
fn test_lex_from_arbitrary_char_source() {
    // Any character iterator works as a source, not just &str.
    let chars = "struct point { int x , int y } ;".chars().filter(|c| *c != ',');
    let reader = PeekableReader::new(chars);
    let tokens: Vec<Token> = Tokenizer::new(reader).collect();

    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Keyword, "struct"),
            Token::new(TokenKind::Identifier, "point"),
            Token::new(TokenKind::Punctuation, "{"),
            Token::new(TokenKind::Keyword, "int"),
            Token::new(TokenKind::Identifier, "x"),
            Token::new(TokenKind::Keyword, "int"),
            Token::new(TokenKind::Identifier, "y"),
            Token::new(TokenKind::Punctuation, "}"),
            Token::new(TokenKind::Punctuation, ";"),
        ]
    );
}

#[test]
fn test_lex_input_with_no_lexable_tokens() {
    // Digits, operators, quotes and strings have no rules yet; the whole
    // input is consumed without producing anything.
    let tokens = tokenize("1 + 2 * 3 == \"7\"");
    assert_eq!(tokens, vec![]);
}

#[test]
fn test_requesting_past_the_end_yields_nothing() {
    let mut lexer = Tokenizer::from_source(";");
    assert_eq!(
        lexer.next_token(),
        Some(Token::new(TokenKind::Punctuation, ";"))
    );
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), None);
    }
}
