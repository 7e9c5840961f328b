// gdecimal: exact base-10 decimal arithmetic
// decimal/mod.rs

mod cast;
mod cmp;
mod fmt;
mod number;
mod ops;
mod parse;

pub use number::{Decimal, Flags};
