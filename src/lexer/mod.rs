//! Lexical analysis module.
//!
//! This module contains the tokenizer that converts source text into a
//! stream of tokens for a future parser. It handles:
//!
//! - Single-character punctuation tokens
//! - Keywords and identifiers with maximal-munch scanning
//! - Silent discard of everything the grammar does not lex yet
//!
//! Tokens are produced lazily: the consumer pulls them one at a time and
//! each pull drives the reader forward until a token is ready or the
//! input runs out.

pub mod lexer;
pub mod tokens;
