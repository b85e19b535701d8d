use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser that matches a single ASCII whitespace character
///
/// Whitespace is classified by [`char::is_ascii_whitespace`]: space, tab,
/// newline, carriage return, and form feed.
pub fn whitespace<'src>() -> impl Parser<'src, Output = char> {
    WhitespaceParser
}

struct WhitespaceParser;

impl<'src> Parser<'src> for WhitespaceParser {
    type Output = char;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        match cursor.value() {
            Ok(ch) if ch.is_ascii_whitespace() => Ok((ch, cursor.next())),
            Ok(ch) => Err(ParseError::new(format!(
                "Expected whitespace, found '{}'",
                ch
            ))),
            Err(_) => Err(ParseError::new("Expected whitespace, found 'EOF'")),
        }
    }
}
