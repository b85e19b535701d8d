use crate::ParseError;
use crate::ascii;
use crate::cursor::StrCursor;
use crate::many::many;
use crate::parser::Parser;

/// Parser that matches zero or more ASCII whitespace characters
///
/// Never fails; on non-whitespace input it succeeds with an empty
/// collection and an untouched remainder.
pub fn many_whitespace<'src>() -> impl Parser<'src, Output = Vec<char>> {
    many(ascii::whitespace())
}

/// Parser combinator that discards leading whitespace before another parser
///
/// Equivalent to chaining [`many_whitespace`] into the parser and ignoring
/// the collected whitespace. Only leading whitespace is skipped; whatever
/// follows the inner parser is left alone.
pub struct SkipWhitespace<P> {
    parser: P,
}

impl<P> SkipWhitespace<P> {
    pub fn new(parser: P) -> Self {
        SkipWhitespace { parser }
    }
}

impl<'src, P> Parser<'src> for SkipWhitespace<P>
where
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        let (_, cursor) = many_whitespace().parse(cursor)?;
        self.parser.parse(cursor)
    }
}

/// Convenience function to create a SkipWhitespace parser
pub fn skip_leading<'src, P>(parser: P) -> SkipWhitespace<P>
where
    P: Parser<'src>,
{
    SkipWhitespace::new(parser)
}
