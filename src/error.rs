use std::borrow::Cow;
use thiserror::Error;

/// Error produced when a parser rejects its input.
///
/// The error carries a single human-readable message and nothing else: no
/// position, no expected/actual fields, no cause chain. Combinators that try
/// alternatives aggregate the messages of every rejected branch with
/// [`ParseError::join`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    message: Cow<'static, str>,
}

impl ParseError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            message: message.into(),
        }
    }

    /// Error for reading past the end of the input
    pub fn end_of_input() -> Self {
        ParseError::new("Unexpected end of input")
    }

    /// The message carried by this error
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Combine two failure messages into one, separated by `" | "`
    ///
    /// Used by alternative combinators so the caller sees every branch's
    /// reason for rejection.
    pub fn join(self, other: ParseError) -> ParseError {
        ParseError::new(format!("{} | {}", self.message, other.message))
    }
}
