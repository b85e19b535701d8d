use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser built directly from a function over the cursor
///
/// This is the entry point for callers that need a primitive the library
/// does not ship, without defining a new struct:
///
/// ```
/// use charcomb::cursor::StrCursor;
/// use charcomb::from_fn::from_fn;
/// use charcomb::parser::Parser;
/// use charcomb::ParseError;
///
/// let lowercase = from_fn(|cursor: StrCursor<'_>| match cursor.value() {
///     Ok(ch) if ch.is_ascii_lowercase() => Ok((ch, cursor.next())),
///     _ => Err(ParseError::new("Expected lowercase letter")),
/// });
///
/// let (ch, _) = lowercase.parse_str("abc").unwrap();
/// assert_eq!(ch, 'a');
/// ```
pub struct FromFn<F> {
    f: F,
}

impl<'src, F, T> Parser<'src> for FromFn<F>
where
    F: Fn(StrCursor<'src>) -> Result<(T, StrCursor<'src>), ParseError>,
{
    type Output = T;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        (self.f)(cursor)
    }
}

/// Convenience function to create a FromFn parser
pub fn from_fn<'src, F, T>(f: F) -> FromFn<F>
where
    F: Fn(StrCursor<'src>) -> Result<(T, StrCursor<'src>), ParseError>,
{
    FromFn { f }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_whitespace<'src>() -> impl Parser<'src, Output = char> {
        from_fn(|cursor: StrCursor<'_>| match cursor.value() {
            Ok(ch) if !ch.is_ascii_whitespace() => Ok((ch, cursor.next())),
            _ => Err(ParseError::new("Expected non-whitespace character.")),
        })
    }

    #[test]
    fn test_from_fn_success() {
        let parser = non_whitespace();

        let (ch, cursor) = parser.parse_str("ab").unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "b");
    }

    #[test]
    fn test_from_fn_failure() {
        let parser = non_whitespace();

        let error = parser.parse_str(" ab").unwrap_err();
        assert_eq!(error.to_string(), "Expected non-whitespace character.");
    }

    #[test]
    fn test_from_fn_empty_input() {
        let parser = non_whitespace();

        assert!(parser.parse_str("").is_err());
    }

    #[test]
    fn test_from_fn_composes_with_combinators() {
        use crate::some::some;

        let parser = some(non_whitespace());

        let (chars, cursor) = parser.parse_str("word rest").unwrap();
        assert_eq!(chars, vec!['w', 'o', 'r', 'd']);
        assert_eq!(cursor.rest(), " rest");
    }
}
