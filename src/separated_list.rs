use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser combinator that matches zero or more items separated by a parser
///
/// Repeatedly parses an element, then attempts the separator; the loop
/// continues only while the separator succeeds. The combinator itself never
/// fails: when the element parser fails, whatever was collected so far is
/// returned along with the remainder at that point.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"x y z"` with a whitespace separator → `vec!['x', 'y', 'z']`
///
/// # Note
/// - Matches zero elements without error
/// - A separator that succeeds but is followed by a failing element stays
///   consumed: `"10,20,"` with a `,` separator yields `[10, 20]` with the
///   trailing comma eaten. Wrap the separator in
///   [`Optional`](crate::optional::Optional)-style composition if the
///   dangling separator must be kept.
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'src, P, PS> Parser<'src> for SeparatedList<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        let mut results = Vec::new();

        loop {
            // Parse the next element; stop collecting when it fails
            let (value, after_element) = match self.parser.parse(cursor) {
                Ok(result) => result,
                Err(_) => break,
            };
            results.push(value);
            cursor = after_element;

            // Continue only while a separator follows
            match self.separator.parse(cursor) {
                Ok((_, after_separator)) => cursor = after_separator,
                Err(_) => break,
            }
        }

        Ok((results, cursor))
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn separated_list<'src, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'src>,
    PS: Parser<'src>,
{
    SeparatedList::new(parser, separator)
}
