use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both parsers read from the same cursor, so a failed first branch consumes
/// nothing before the second runs. Earlier parsers take priority: the first
/// success wins even if a later branch would also match. When both branches
/// fail, their messages are joined with `" | "`.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'src, P1, P2, O> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    type Output = O;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(first) => match self.parser2.parse(cursor) {
                Ok(result) => Ok(result),
                Err(second) => Err(first.join(second)),
            },
        }
    }
}

/// Convenience function to create an Or parser
pub fn or<'src, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;

    #[test]
    fn test_or_first_succeeds() {
        let parser = is_char('a').or(is_char('b'));

        let (ch, cursor) = parser.parse_str("abc").unwrap();
        assert_eq!(ch, 'a');
        assert_eq!(cursor.rest(), "bc");
    }

    #[test]
    fn test_or_second_succeeds() {
        let parser = is_char('a').or(is_char('b'));

        let (ch, cursor) = parser.parse_str("bcd").unwrap();
        assert_eq!(ch, 'b');
        assert_eq!(cursor.rest(), "cd");
    }

    #[test]
    fn test_or_first_match_wins() {
        // 'a' matches both branches; the first one is used
        let parser = is_char('a').or(is_char('a'));

        let (ch, cursor) = parser.parse_str("a").unwrap();
        assert_eq!(ch, 'a');
        assert!(matches!(cursor, StrCursor::EndOfInput { .. }));
    }

    #[test]
    fn test_or_both_fail_aggregates_messages() {
        let parser = is_char('a').or(is_char('b'));

        let error = parser.parse_str("xyz").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Expected 'a', found 'x' | Expected 'b', found 'x'"
        );
    }

    #[test]
    fn test_or_chain_aggregates_every_branch() {
        let parser = is_char('a').or(is_char('b')).or(is_char('c'));

        let error = parser.parse_str("z").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Expected 'a', found 'z' | Expected 'b', found 'z' | Expected 'c', found 'z'"
        );
    }

    #[test]
    fn test_or_second_branch_reads_from_the_start() {
        use crate::string::is_string;

        // First branch consumes two chars before failing; the second
        // branch must still see the whole input.
        let parser = is_string("ab!").or(is_string("abc"));

        let (matched, cursor) = parser.parse_str("abc").unwrap();
        assert_eq!(matched, "abc");
        assert!(matches!(cursor, StrCursor::EndOfInput { .. }));
    }

    #[test]
    fn test_function_syntax() {
        let parser = or(is_char('x'), is_char('y'));

        let (ch, _) = parser.parse_str("y").unwrap();
        assert_eq!(ch, 'y');
    }
}
