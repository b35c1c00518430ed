use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

lazy_static! {
    /// Reserved words of the grammar.
    ///
    /// Reproduced verbatim from the language definition, which is
    /// deliberately partial; membership here is the only thing that
    /// separates a keyword from an identifier.
    pub static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("short");
        set.insert("long");
        set.insert("float");
        set.insert("double");
        set.insert("signed");
        set.insert("unsigned");
        set.insert("return");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("break");
        set.insert("continue");
        set.insert("switch");
        set.insert("case");
        set.insert("default");
        set.insert("void");
        set.insert("static");
        set.insert("extern");
        set.insert("const");
        set.insert("typedef");
        set.insert("struct");
        set.insert("union");
        set.insert("enum");
        set.insert("sizeof");
        set
    };
}

/// Characters lexed as one-character punctuation tokens.
pub const PUNCTUATION: [char; 8] = ['{', '}', '(', ')', '[', ']', ',', ';'];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Punctuation,
    Keyword,
    /// Reserved for numeric literals. No lexing rule produces this kind
    /// yet; digits outside an identifier run are discarded.
    NumericConstant,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified slice of source text.
///
/// `value` is always the exact substring that produced the token, in the
/// order it appeared in the input. Tokens are immutable and compare by
/// value: two tokens with equal kind and value are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Token {
        Token {
            kind,
            value: value.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.value)
    }
}
