//! # charcomb - Character-Level Parser Combinators
//!
//! A small parser combinator library for building recursive-descent parsers
//! over plain strings out of reusable pieces.
//!
//! charcomb provides composable, type-safe parsers that combine into larger
//! parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Zero panics**: All parsing failures are ordinary `Result` values
//! - **Statelessness**: Parsers are immutable and freely reusable; input is
//!   never mutated, so alternatives backtrack by re-reading the same cursor
//! - **Composability**: Small parsers combine into larger ones using
//!   combinators
//! - **Flat errors**: A failure is one descriptive message; alternative
//!   combinators aggregate the messages of every rejected branch

pub mod and;
pub mod and_then;
pub mod ascii;
pub mod boxed;
pub mod char;
pub mod choice;
pub mod cursor;
pub mod error;
pub mod from_fn;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod separated_list;
pub mod some;
pub mod string;
pub mod whitespace;

pub use boxed::{BoxedExt, BoxedParser};
pub use cursor::StrCursor;
pub use error::ParseError;
pub use parser::Parser;
