use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser that matches a specific string, char for char
///
/// On success the returned value is the matched slice of the input. On
/// failure the error names the expected literal and whatever prefix of the
/// same length (or the whole remaining input, if shorter) was actually
/// present.
pub struct IsStringParser {
    expected: String,
}

impl IsStringParser {
    pub fn new(expected: impl Into<String>) -> Self {
        IsStringParser {
            expected: expected.into(),
        }
    }

    fn mismatch(&self, cursor: &StrCursor<'_>) -> ParseError {
        let found: String = cursor
            .rest()
            .chars()
            .take(self.expected.chars().count())
            .collect();
        ParseError::new(format!(
            "Expected \"{}\", found \"{}\"",
            self.expected, found
        ))
    }
}

impl<'src> Parser<'src> for IsStringParser {
    type Output = &'src str;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        let start = cursor;
        let mut cursor = cursor;

        for expected_ch in self.expected.chars() {
            match cursor.value() {
                Ok(ch) if ch == expected_ch => cursor = cursor.next(),
                _ => return Err(self.mismatch(&start)),
            }
        }

        let matched = &start.rest()[..self.expected.len()];
        Ok((matched, cursor))
    }
}

/// Convenience function to create an IsStringParser
pub fn is_string(expected: impl Into<String>) -> IsStringParser {
    IsStringParser::new(expected)
}
