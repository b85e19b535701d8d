use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// `Many` never fails: it stops at the first failure of the inner parser
/// and succeeds with whatever was collected up to that point, which may be
/// nothing at all.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    results.push(value);
                    cursor = next_cursor;
                }
                Err(_) => {
                    // Zero or more, so the error is not propagated
                    break;
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::{any_char, is_char};

    #[test]
    fn test_many_zero_matches() {
        let parser = many(is_char('a'));

        let (results, cursor) = parser.parse_str("xyz").unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(cursor.rest(), "xyz");
    }

    #[test]
    fn test_many_one_match() {
        let parser = many(is_char('a'));

        let (results, cursor) = parser.parse_str("abc").unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_many_multiple_matches() {
        let parser = many(is_char('a'));

        let (results, cursor) = parser.parse_str("aaabcd").unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(cursor.rest(), "bcd");
    }

    #[test]
    fn test_many_consumes_everything() {
        let parser = many(any_char());

        let (results, cursor) = parser.parse_str("hello").unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert!(matches!(cursor, StrCursor::EndOfInput { .. }));
    }

    #[test]
    fn test_many_empty_input_never_fails() {
        let parser = many(is_char('a'));

        let (results, cursor) = parser.parse_str("").unwrap();
        assert_eq!(results, vec![]);
        assert!(matches!(cursor, StrCursor::EndOfInput { .. }));
    }

    #[test]
    fn test_many_remainder_starts_at_first_failure() {
        let parser = many(is_char('a'));

        let (results, cursor) = parser.parse_str("aax").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(cursor.rest(), "x");
    }
}
