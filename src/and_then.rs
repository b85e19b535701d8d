use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser combinator that chains a dependent parser onto a first parser
///
/// The binder function receives the first parser's value and returns the
/// parser to run next, which is applied to the remainder of the first
/// parse. This is the monadic sequencing primitive: every other form of
/// sequencing can be expressed with it.
///
/// Example:
/// ```
/// use charcomb::and_then::AndThenExt;
/// use charcomb::char::{any_char, is_char};
/// use charcomb::parser::Parser;
///
/// // Parse a char, then require the same char again
/// let doubled = any_char().and_then(|first| is_char(first));
///
/// let (ch, _) = doubled.parse_str("aab").unwrap();
/// assert_eq!(ch, 'a');
/// assert!(doubled.parse_str("ab").is_err());
/// ```
pub struct AndThen<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> AndThen<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        AndThen { parser, binder }
    }
}

impl<'src, P, F, P2> Parser<'src> for AndThen<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        let (value, cursor) = self.parser.parse(cursor)?;
        (self.binder)(value).parse(cursor)
    }
}

/// Convenience function to create an AndThen parser
pub fn and_then<'src, P, F, P2>(parser: P, binder: F) -> AndThen<P, F>
where
    P: Parser<'src>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'src>,
{
    AndThen::new(parser, binder)
}

/// Extension trait to add .and_then() method support for parsers
pub trait AndThenExt<'src>: Parser<'src> + Sized {
    fn and_then<F, P2>(self, binder: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'src>,
    {
        AndThen::new(self, binder)
    }
}

/// Implement AndThenExt for all parsers
impl<'src, P> AndThenExt<'src> for P where P: Parser<'src> {}
