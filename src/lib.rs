//! Thrift IDL parser.
//!
//! [`parse`] turns a Thrift source into a [`Document`]: a tree keyed by
//! construct kind and then by declared name, serializable to JSON with
//! `serde`.
//!
//! ```
//! let document = thrift_parser::parse("struct Point { 1: i32 x, 2: i32 y }").unwrap();
//! assert_eq!(document.structure["Point"].len(), 2);
//! ```

pub mod ast;
pub mod cli;
pub mod errors;
pub mod options;
pub mod syntax;

pub use ast::Document;
pub use errors::ParseError;
pub use options::ParseOptions;

/// Parse a whole Thrift source with default options.
pub fn parse(source: &str) -> Result<Document, ParseError> {
    parse_with_options(source, &ParseOptions::default())
}

pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    syntax::read_document(source, options)
}

/// Parse a raw buffer. Invalid UTF-8 fails at the first bad byte.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document, ParseError> {
    parse_bytes_with_options(bytes, &ParseOptions::default())
}

pub fn parse_bytes_with_options(
    bytes: &[u8],
    options: &ParseOptions,
) -> Result<Document, ParseError> {
    let source = std::str::from_utf8(bytes).map_err(|error| ParseError::Encoding {
        offset: error.valid_up_to(),
    })?;
    parse_with_options(source, options)
}
