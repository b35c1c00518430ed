//! Character-input layer for the lexer.
//!
//! This module contains the lookahead reader the tokenizer pulls its
//! characters from. It handles:
//!
//! - Buffering of exactly one peeked character
//! - Consume-and-advance reads with an end-of-input signal
//! - Lazy iteration over the remaining characters
//!
//! The reader is the only component that touches the underlying source;
//! opening and closing that source stays with the caller.

pub mod reader;
