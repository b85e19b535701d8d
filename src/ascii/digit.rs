use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser that matches a single ASCII digit (0-9)
pub fn digit<'src>() -> impl Parser<'src, Output = char> {
    DigitParser
}

struct DigitParser;

impl<'src> Parser<'src> for DigitParser {
    type Output = char;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        match cursor.value() {
            Ok(ch) if ch.is_ascii_digit() => Ok((ch, cursor.next())),
            Ok(ch) => Err(ParseError::new(format!("Expected digit, found '{}'", ch))),
            Err(_) => Err(ParseError::new("Expected digit, found 'EOF'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_zero() {
        let parser = digit();

        let (d, cursor) = parser.parse_str("0abc").unwrap();
        assert_eq!(d, '0');
        assert_eq!(cursor.rest(), "abc");
    }

    #[test]
    fn test_digit_nine() {
        let parser = digit();

        let (d, cursor) = parser.parse_str("9xyz").unwrap();
        assert_eq!(d, '9');
        assert_eq!(cursor.rest(), "xyz");
    }

    #[test]
    fn test_digit_single() {
        let parser = digit();

        let (d, cursor) = parser.parse_str("5").unwrap();
        assert_eq!(d, '5');
        assert!(matches!(cursor, StrCursor::EndOfInput { .. }));
    }

    #[test]
    fn test_digit_non_digit_fails() {
        let parser = digit();

        let error = parser.parse_str("abc").unwrap_err();
        assert_eq!(error.to_string(), "Expected digit, found 'a'");
    }

    #[test]
    fn test_digit_empty_input() {
        let parser = digit();

        let error = parser.parse_str("").unwrap_err();
        assert_eq!(error.to_string(), "Expected digit, found 'EOF'");
    }

    #[test]
    fn test_digit_rejects_non_ascii_numerals() {
        let parser = digit();

        // Arabic-Indic digit, not ASCII
        assert!(parser.parse_str("٥").is_err());
    }
}
