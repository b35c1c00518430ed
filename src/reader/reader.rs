use thiserror::Error;

/// Signal returned by [`PeekableReader::read`] once the underlying source
/// has no characters left.
///
/// End of input is ordinary control flow, not a failure: the tokenizer
/// stops producing tokens when it sees this, and nothing is reported to
/// the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("end of input")]
pub struct EndOfInput;

/// A character source with exactly one character of lookahead.
///
/// Wraps any character iterator (an in-memory string, a file read into
/// memory, an incrementally fed source) and exposes `peek`/`read` on top
/// of it. At most one unconsumed character is ever buffered, which is all
/// the current token-recognition rules need. A reader is single use:
/// there is no rewind.
pub struct PeekableReader<I> {
    source: I,
    peeked: Option<char>,
    pos: usize,
}

impl<I> PeekableReader<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(source: I) -> PeekableReader<I> {
        PeekableReader {
            source,
            peeked: None,
            pos: 0,
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// Idempotent: repeated calls with no intervening [`read`](Self::read)
    /// return the same character. Returns `None` once the source is
    /// exhausted; peeking never signals [`EndOfInput`] itself.
    pub fn peek(&mut self) -> Option<char> {
        if self.peeked.is_none() {
            self.peeked = self.source.next();
        }
        self.peeked
    }

    /// Consumes and returns the next character, advancing the position.
    ///
    /// A character buffered by a previous `peek` is handed out before the
    /// source is touched again. This is the only operation that signals
    /// [`EndOfInput`].
    pub fn read(&mut self) -> Result<char, EndOfInput> {
        let result = match self.peeked.take() {
            Some(c) => c,
            None => self.source.next().ok_or(EndOfInput)?,
        };
        self.pos += 1;
        Ok(result)
    }

    /// Number of characters consumed so far. A peeked-but-unread
    /// character does not count.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<I> Iterator for PeekableReader<I>
where
    I: Iterator<Item = char>,
{
    type Item = char;

    fn next(&mut self) -> Option<char> {
        self.read().ok()
    }
}
