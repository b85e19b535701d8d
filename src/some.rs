use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Behaves like [`Many`](crate::many::Many), except that an empty
/// collection is a failure: `Expected at least one occurrence`.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'src, P> Parser<'src> for Some<P>
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
                Err(_) => break,
            }
        }

        if results.is_empty() {
            return Err(ParseError::new("Expected at least one occurrence"));
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<'src, P>(parser: P) -> Some<P>
where
    P: Parser<'src>,
{
    Some::new(parser)
}
