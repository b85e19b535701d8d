use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// A parser behind dynamic dispatch
///
/// Combinator structs all have distinct types, so collecting alternatives in
/// a `Vec` (as [`choice`](crate::choice::choice) does) requires erasing the
/// concrete type first. `BoxedParser` wraps any parser with a given output
/// type behind a `Box<dyn Parser>`.
pub struct BoxedParser<'src, T> {
    inner: Box<dyn Parser<'src, Output = T> + 'src>,
}

impl<'src, T> BoxedParser<'src, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'src, Output = T> + 'src,
    {
        BoxedParser {
            inner: Box::new(parser),
        }
    }
}

impl<'src, T> Parser<'src> for BoxedParser<'src, T> {
    type Output = T;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        self.inner.parse(cursor)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'src>: Parser<'src> + Sized + 'src {
    fn boxed(self) -> BoxedParser<'src, Self::Output> {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'src, P> BoxedExt<'src> for P where P: Parser<'src> + 'src {}
