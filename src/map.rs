use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'src, P, F, T, U> Parser<'src> for Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'src, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'src>: Parser<'src> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'src, P> MapExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::some::some;

    #[test]
    fn test_map_char_to_digit_value() {
        let parser = is_char('7').map(|ch| ch as u32 - '0' as u32);

        let (value, cursor) = parser.parse_str("7!").unwrap();
        assert_eq!(value, 7);
        assert_eq!(cursor.rest(), "!");
    }

    #[test]
    fn test_map_leaves_remainder_untouched() {
        let parser = is_char('a').map(|_| "seen");

        let (value, cursor) = parser.parse_str("abc").unwrap();
        assert_eq!(value, "seen");
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_map_forwards_errors_unchanged() {
        let parser = is_char('a').map(|ch| ch.to_ascii_uppercase());

        let error = parser.parse_str("xyz").unwrap_err();
        assert_eq!(error.to_string(), "Expected 'a', found 'x'");
    }

    #[test]
    fn test_map_is_not_called_on_failure() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let parser = is_char('a').map(|ch| {
            calls.set(calls.get() + 1);
            ch
        });

        assert!(parser.parse_str("x").is_err());
        assert_eq!(calls.get(), 0);

        assert!(parser.parse_str("a").is_ok());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_identity_behaves_like_the_parser() {
        let plain = is_char('a');
        let mapped = is_char('a').map(|ch| ch);

        let (plain_value, plain_cursor) = plain.parse_str("abc").unwrap();
        let (mapped_value, mapped_cursor) = mapped.parse_str("abc").unwrap();
        assert_eq!(plain_value, mapped_value);
        assert_eq!(plain_cursor.rest(), mapped_cursor.rest());

        let plain_error = plain.parse_str("z").unwrap_err();
        let mapped_error = mapped.parse_str("z").unwrap_err();
        assert_eq!(plain_error, mapped_error);
    }

    #[test]
    fn test_map_collect_chars_into_string() {
        let parser = some(is_char('a')).map(|chars| chars.into_iter().collect::<String>());

        let (word, cursor) = parser.parse_str("aaab").unwrap();
        assert_eq!(word, "aaa");
        assert_eq!(cursor.rest(), "b");
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(is_char('9'), |ch| ch.is_ascii_digit());

        let (value, _) = parser.parse_str("9").unwrap();
        assert!(value);
    }
}
