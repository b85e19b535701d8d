use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser that consumes and returns a single char
pub struct AnyCharParser;

impl<'src> Parser<'src> for AnyCharParser {
    type Output = char;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        let ch = cursor.value()?;
        Ok((ch, cursor.next()))
    }
}

/// Convenience function to create an AnyCharParser
pub fn any_char() -> AnyCharParser {
    AnyCharParser
}

/// Parser that matches one specific char
pub struct IsCharParser {
    expected: char,
}

impl IsCharParser {
    pub fn new(expected: char) -> Self {
        IsCharParser { expected }
    }
}

impl<'src> Parser<'src> for IsCharParser {
    type Output = char;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        match cursor.value() {
            Ok(ch) if ch == self.expected => Ok((ch, cursor.next())),
            Ok(ch) => Err(ParseError::new(format!(
                "Expected '{}', found '{}'",
                self.expected, ch
            ))),
            Err(_) => Err(ParseError::new(format!(
                "Expected '{}', found 'EOF'",
                self.expected
            ))),
        }
    }
}

/// Convenience function to create a parser that matches a specific char
pub fn is_char(expected: char) -> IsCharParser {
    IsCharParser::new(expected)
}
