//! The `thrift-parser` command-line interface.
//!
//! Each input is read whole, parsed once and printed as JSON. The first
//! failure stops the run with a non-zero exit status.

use crate::cli::args::ThriftArgs;
use crate::options::ParseOptions;
use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::{fs, io};
use tracing::debug;

pub mod args;
pub mod output;

pub fn run() -> ExitCode {
    let args = ThriftArgs::parse();
    setup_logging(&args);

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            output::print_error(report);
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(args: &ThriftArgs) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = args.log_level {
        EnvFilter::new(level.as_directive())
    } else if args.quiet {
        EnvFilter::new("error")
    } else {
        match args.verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}

fn execute(args: &ThriftArgs) -> miette::Result<()> {
    let options = ParseOptions::default().with_excerpt_len(args.excerpt_len);

    if args.files.is_empty() {
        let mut source = Vec::new();
        io::stdin()
            .read_to_end(&mut source)
            .into_diagnostic()
            .wrap_err("failed to read standard input")?;
        return parse_and_print(&source, &options.with_source_name("<stdin>"), args.compact);
    }

    for path in &args.files {
        let source = read_file(path)?;
        let options = options.clone().with_source_name(path.display().to_string());
        parse_and_print(&source, &options, args.compact)?;
    }
    Ok(())
}

fn read_file(path: &Path) -> miette::Result<Vec<u8>> {
    debug!(path = %path.display(), "reading");
    fs::read(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn parse_and_print(source: &[u8], options: &ParseOptions, compact: bool) -> miette::Result<()> {
    let document = crate::parse_bytes_with_options(source, options)?;
    output::print_document(&document, compact)
}
