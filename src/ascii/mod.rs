pub mod digit;
pub mod number;
pub mod whitespace;

pub use digit::digit;
pub use number::u64;
pub use whitespace::whitespace;
