use std::str::Chars;

use log::trace;

use crate::reader::reader::PeekableReader;

use super::tokens::{Token, TokenKind, PUNCTUATION, RESERVED_WORDS};

/// Pull-based token producer.
///
/// Drives a [`PeekableReader`] one character at a time and classifies
/// runs of characters into tokens. The machine has two states: an outer
/// scanning loop and an identifier/keyword scan entered on an alphabetic
/// character. Production stops permanently once the reader is exhausted.
pub struct Tokenizer<I> {
    reader: PeekableReader<I>,
}

impl<'a> Tokenizer<Chars<'a>> {
    pub fn from_source(source: &'a str) -> Tokenizer<Chars<'a>> {
        Tokenizer::new(PeekableReader::new(source.chars()))
    }
}

impl<I> Tokenizer<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(reader: PeekableReader<I>) -> Tokenizer<I> {
        Tokenizer { reader }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    ///
    /// The lexer raises no errors for any input: characters that start no
    /// token are consumed and discarded, and end of input terminates the
    /// stream cleanly.
    pub fn next_token(&mut self) -> Option<Token> {
        loop {
            let Ok(c) = self.reader.read() else {
                return None;
            };

            if PUNCTUATION.contains(&c) {
                return Some(Token::new(TokenKind::Punctuation, c.to_string()));
            } else if c.is_alphabetic() {
                return Some(self.identifier_or_keyword(c));
            } else {
                // No rule matches: whitespace, digits, operators, quotes
                // and anything else land here and produce nothing.
                // Numeric-constant and operator recognition would hang
                // off this arm.
                trace!(
                    "discarding unsupported character {:?} at position {}",
                    c,
                    self.reader.position()
                );
            }
        }
    }

    /// Maximal-munch scan of the alphanumeric run starting at `first`.
    ///
    /// The boundary test peeks instead of reading, so the character that
    /// terminates the run stays buffered for the next token: `"x;"` lexes
    /// as an identifier followed by punctuation.
    fn identifier_or_keyword(&mut self, first: char) -> Token {
        let mut value = String::from(first);
        while self.reader.peek().is_some_and(char::is_alphanumeric) {
            // read cannot fail here, peek just buffered a character
            if let Ok(c) = self.reader.read() {
                value.push(c);
            }
        }

        let kind = if RESERVED_WORDS.contains(value.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        Token::new(kind, value)
    }
}

impl<I> Iterator for Tokenizer<I>
where
    I: Iterator<Item = char>,
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenizes a whole source buffer eagerly.
///
/// Convenience wrapper over [`Tokenizer`] for callers that do not need
/// the lazy stream. Infallible: the current grammar has no error
/// productions.
pub fn tokenize(source: &str) -> Vec<Token> {
    Tokenizer::from_source(source).collect()
}
