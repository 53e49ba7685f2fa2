use std::process::ExitCode;

fn main() -> ExitCode {
    thrift_parser::cli::run()
}
