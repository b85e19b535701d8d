use crate::ParseError;
use crate::cursor::StrCursor;

/// Core parser trait for parser combinators
///
/// A parser is an immutable unit of behavior: applied to a cursor it either
/// succeeds with a value and the cursor past the consumed input, or fails
/// with a [`ParseError`]. Parsers carry no mutable state, so the same value
/// can be applied repeatedly and reused inside composite parsers.
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures do not consume input: the
    /// caller still holds the cursor it passed in.
    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError>;

    /// Apply this parser to the start of a string
    fn parse_str(&self, input: &'src str) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        self.parse(StrCursor::new(input))
    }
}
