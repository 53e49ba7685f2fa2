//! Shared helpers for the integration tests.

#![allow(dead_code)]

use serde_json::Value;
use thrift_parser::{parse, ParseError};

/// Parse `source` and return the document as JSON, panicking on failure.
pub fn parse_json(source: &str) -> Value {
    match parse(source) {
        Ok(document) => serde_json::to_value(&document).expect("document serializes"),
        Err(error) => panic!("expected {source:?} to parse, got: {error}"),
    }
}

/// Assert that `source` is rejected and return the error.
pub fn assert_rejects(source: &str) -> ParseError {
    match parse(source) {
        Ok(document) => panic!("expected {source:?} to be rejected, got: {document:?}"),
        Err(error) => error,
    }
}

pub fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}
