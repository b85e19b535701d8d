use super::digit::digit;
use crate::ParseError;
use crate::cursor::StrCursor;
use crate::parser::Parser;
use crate::some::some;

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// The digits are folded left to right (`value * 10 + digit`). There is no
/// sign handling and no leading-zero rejection. Overflow is not detected:
/// digit runs beyond the range of `u64` wrap around. Callers that need
/// signs or bounds checking compose them on top.
pub fn u64<'src>() -> impl Parser<'src, Output = u64> {
    UIntParser
}

struct UIntParser;

impl<'src> Parser<'src> for UIntParser {
    type Output = u64;

    fn parse(
        &self,
        cursor: StrCursor<'src>,
    ) -> Result<(Self::Output, StrCursor<'src>), ParseError> {
        let (digits, cursor) = some(digit()).parse(cursor)?;

        let mut value: u64 = 0;
        for ch in digits {
            value = value
                .wrapping_mul(10)
                .wrapping_add(ch as u64 - '0' as u64);
        }

        Ok((value, cursor))
    }
}
