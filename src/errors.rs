//! Parse failures.
//!
//! Backtracking inside the parser never produces a [`ParseError`]; only the
//! document driver does, once no declaration matches and input remains.

use miette::{Diagnostic, NamedSource, SourceSpan};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    /// No declaration matched and the input was not exhausted.
    #[error("parsing error at byte {offset}: {excerpt}")]
    #[diagnostic(code(thrift::parse::unmatched))]
    Unmatched {
        offset: usize,
        excerpt: String,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("no declaration matches here")]
        span: SourceSpan,
        #[label("furthest point reached")]
        furthest: Option<SourceSpan>,
        #[help]
        help: Option<String>,
    },

    /// Container types or literals nested past the configured depth.
    #[error("parsing error at byte {offset}: nesting deeper than {limit} levels")]
    #[diagnostic(
        code(thrift::parse::depth),
        help("raise the depth limit with ParseOptions::with_max_depth")
    )]
    NestingTooDeep {
        offset: usize,
        limit: usize,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("too deeply nested")]
        span: SourceSpan,
    },

    /// Raw input was not valid UTF-8.
    #[error("parsing error at byte {offset}: input is not valid UTF-8")]
    #[diagnostic(
        code(thrift::parse::encoding),
        help("Thrift sources must be UTF-8 encoded")
    )]
    Encoding { offset: usize },
}

impl ParseError {
    /// Byte offset where matching stopped.
    pub fn offset(&self) -> usize {
        match self {
            Self::Unmatched { offset, .. }
            | Self::NestingTooDeep { offset, .. }
            | Self::Encoding { offset } => *offset,
        }
    }

    /// The unconsumed text at the stop offset, empty for other failures.
    pub fn excerpt(&self) -> &str {
        match self {
            Self::Unmatched { excerpt, .. } => excerpt,
            Self::NestingTooDeep { .. } | Self::Encoding { .. } => "",
        }
    }

    /// What the furthest-reaching reader expected, when it got past the stop
    /// offset.
    pub fn help_text(&self) -> Option<&str> {
        match self {
            Self::Unmatched { help, .. } => help.as_deref(),
            Self::NestingTooDeep { .. } | Self::Encoding { .. } => None,
        }
    }
}

/// One-based line and column (in chars) of a byte offset.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset.min(source.len())];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

// ============================================================================
// TESTS
// ============================================================================
