//! Command-line arguments for the `thrift-parser` binary.

use crate::options::DEFAULT_EXCERPT_LEN;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Parse Thrift IDL files and print each as JSON.
#[derive(Debug, Parser)]
#[command(
    name = "thrift-parser",
    version,
    about = "Parse Thrift IDL files and print the document tree as JSON."
)]
pub struct ThriftArgs {
    /// Thrift files to parse. Standard input is read when none are given.
    pub files: Vec<PathBuf>,

    /// Print single-line JSON instead of indented JSON.
    #[arg(long)]
    pub compact: bool,

    /// Bytes of unparsed input to quote in a parse error.
    #[arg(long, default_value_t = DEFAULT_EXCERPT_LEN)]
    pub excerpt_len: usize,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Explicit log level; overrides -v and -q.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}
