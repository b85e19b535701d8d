use crate::ParseError;

/// A position in an immutable string, advancing one `char` at a time.
///
/// Cursors are cheap `Copy` values. Advancing never mutates the underlying
/// string; it produces a new cursor whose [`rest`](StrCursor::rest) is a
/// suffix of the original input. Saving a cursor before trying a parser and
/// reusing it afterwards is how alternatives backtrack for free.
#[derive(Debug, Copy, Clone)]
pub enum StrCursor<'src> {
    /// Cursor pointing at a valid char position
    Valid {
        data: &'src str,
        /// Byte offset into `data`, always on a char boundary
        position: usize,
    },
    /// Cursor past the last char - nothing left to read
    EndOfInput { data: &'src str },
}

impl<'src> StrCursor<'src> {
    pub fn new(data: &'src str) -> Self {
        if data.is_empty() {
            return StrCursor::EndOfInput { data };
        }
        StrCursor::Valid { data, position: 0 }
    }

    /// Get the char at the current cursor position
    ///
    /// Returns an error if the cursor is at the end of the input.
    pub fn value(&self) -> Result<char, ParseError> {
        match self {
            StrCursor::Valid { data, position } => data[*position..]
                .chars()
                .next()
                .ok_or_else(ParseError::end_of_input),
            StrCursor::EndOfInput { .. } => Err(ParseError::end_of_input()),
        }
    }

    /// Advance the cursor past the current char
    ///
    /// An end-of-input cursor stays at end-of-input.
    pub fn next(self) -> Self {
        match self {
            StrCursor::Valid { data, position } => match data[position..].chars().next() {
                Some(ch) => {
                    let position = position + ch.len_utf8();
                    if position >= data.len() {
                        StrCursor::EndOfInput { data }
                    } else {
                        StrCursor::Valid { data, position }
                    }
                }
                None => StrCursor::EndOfInput { data },
            },
            end @ StrCursor::EndOfInput { .. } => end,
        }
    }

    /// The unconsumed suffix of the input
    pub fn rest(&self) -> &'src str {
        match self {
            StrCursor::Valid { data, position } => &data[*position..],
            StrCursor::EndOfInput { data } => &data[data.len()..],
        }
    }

    /// Byte offset of the cursor within the input
    pub fn position(&self) -> usize {
        match self {
            StrCursor::Valid { position, .. } => *position,
            StrCursor::EndOfInput { data } => data.len(),
        }
    }

    /// Check whether the cursor has consumed the whole input
    pub fn at_end(&self) -> bool {
        matches!(self, StrCursor::EndOfInput { .. })
    }
}
