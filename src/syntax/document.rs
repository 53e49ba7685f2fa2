//! Document driver.
//!
//! Skips leading trivia, then matches declarations until none applies. Running
//! out of input at that point is success; anything left over is a
//! [`ParseError`]. There is no recovery: one unmatched token fails the parse.

use super::combinators::repeat;
use super::cursor::Cursor;
use super::declarations::read_declaration;
use super::lexical::skip_space;
use crate::ast::Document;
use crate::errors::{line_col, ParseError};
use crate::options::ParseOptions;
use miette::{NamedSource, SourceSpan};
use std::sync::Arc;
use tracing::{debug, trace};

pub fn read_document(source: &str, options: &ParseOptions) -> Result<Document, ParseError> {
    let mut cursor = Cursor::at(source, options.start_offset).with_max_depth(options.max_depth);
    skip_space(&mut cursor);

    let declarations = repeat(&mut cursor, |cursor| {
        let declaration = read_declaration(cursor)?;
        trace!(
            kind = declaration.kind(),
            name = declaration.name(),
            end = cursor.position(),
            "matched declaration"
        );
        Ok(declaration)
    });

    if !cursor.is_eof() {
        if let Some(offset) = cursor.too_deep() {
            debug!(offset, limit = options.max_depth, "nesting too deep");
            return Err(ParseError::NestingTooDeep {
                offset,
                limit: options.max_depth,
                src: Arc::new(NamedSource::new(&options.source_name, source.to_string())),
                span: SourceSpan::from(offset..offset),
            });
        }
        debug!(offset = cursor.position(), "no declaration matches");
        return Err(unmatched(&cursor, options));
    }

    debug!(declarations = declarations.len(), "parsed document");
    let mut document = Document::default();
    for declaration in declarations {
        document.insert(declaration);
    }
    Ok(document)
}

fn unmatched(cursor: &Cursor<'_>, options: &ParseOptions) -> ParseError {
    let source = cursor.source();
    let offset = cursor.position();
    let token_len = cursor.excerpt(options.excerpt_len).chars().next().map_or(0, char::len_utf8);

    // A reader that got further than the stop offset says more about the
    // mistake than the failed keyword match at the stop offset itself.
    let (furthest, help) = match cursor.furthest() {
        Some(f) if f.offset > offset => {
            let (line, column) = line_col(source, f.offset);
            (
                Some(SourceSpan::from(f.offset..f.offset)),
                format!("expected {} at line {line}, column {column}", f.expected),
            )
        }
        _ => (
            None,
            "expected one of: typedef, const, enum, struct, union, exception, service, \
             namespace, include"
                .to_string(),
        ),
    };

    ParseError::Unmatched {
        offset,
        excerpt: cursor.excerpt(options.excerpt_len).to_string(),
        src: Arc::new(NamedSource::new(&options.source_name, source.to_string())),
        span: SourceSpan::from(offset..offset + token_len),
        furthest,
        help: Some(help),
    }
}

// ============================================================================
// TESTS
// ============================================================================
