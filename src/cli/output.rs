//! User-facing output: JSON documents on stdout, rendered diagnostics on
//! stderr.

use crate::ast::Document;
use miette::IntoDiagnostic;
use std::io::{self, Write};

pub fn render_document(document: &Document, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(document)
    } else {
        serde_json::to_string_pretty(document)
    }
}

pub fn print_document(document: &Document, compact: bool) -> miette::Result<()> {
    let json = render_document(document, compact).into_diagnostic()?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").into_diagnostic()
}

/// Print an error through miette's report handler.
pub fn print_error(report: miette::Report) {
    eprintln!("{report:?}");
}
