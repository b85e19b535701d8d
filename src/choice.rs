use crate::ParseError;
use crate::boxed::BoxedParser;
use crate::cursor::StrCursor;
use crate::parser::Parser;

/// Parser combinator that tries a list of alternatives in order
///
/// Every alternative reads from the same cursor; the first success is
/// returned. Earlier alternatives take priority, so this is first-match
/// semantics, not longest-match. If all alternatives fail, the failure
/// message is every branch's message joined with `" | "`. An empty list
/// fails with `No alternatives matched`.
///
/// Example:
/// ```
/// use charcomb::boxed::BoxedExt;
/// use charcomb::choice::choice;
/// use charcomb::parser::Parser;
/// use charcomb::string::is_string;
///
/// let keyword = choice(vec![
///     is_string("let").boxed(),
///     is_string("if").boxed(),
///     is_string("while").boxed(),
/// ]);
///
/// let (matched, _) = keyword.parse_str("while true").unwrap();
/// assert_eq!(matched, "while");
/// ```
pub struct Choice<'src, T> {
    alternatives: Vec<BoxedParser<'src, T>>,
}

impl<'src, T> Choice<'src, T> {
    pub fn new(alternatives: Vec<BoxedParser<'src, T>>) -> Self {
        Choice { alternatives }
    }
}

impl<'src, T> Parser<'src> for Choice<'src, T> {
    type Output = T;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        let mut messages = Vec::new();

        for alternative in &self.alternatives {
            match alternative.parse(cursor) {
                Ok(result) => return Ok(result),
                Err(error) => messages.push(error.message().to_string()),
            }
        }

        if messages.is_empty() {
            Err(ParseError::new("No alternatives matched"))
        } else {
            Err(ParseError::new(messages.join(" | ")))
        }
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'src, T>(alternatives: Vec<BoxedParser<'src, T>>) -> Choice<'src, T> {
    Choice::new(alternatives)
}
