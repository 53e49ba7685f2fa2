//! Backtracking recursive-descent reader for Thrift IDL.
//!
//! Readers are free functions over a shared [`cursor::Cursor`], layered from
//! bytes up: lexical tokens, values and types, declarations, and finally the
//! document driver.

pub mod combinators;
pub mod cursor;
pub mod declarations;
pub mod document;
pub mod lexical;
pub mod types;
pub mod values;

pub use combinators::{Attempt, Mismatch};
pub use cursor::Cursor;
pub use document::read_document;
