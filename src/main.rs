use std::process::ExitCode;

use clap::Parser;
use locov::cli::{Arguments, Command, ExitStatus, init_logger};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logger(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = locov::mcp::run_server() {
            eprintln!("Error: {:#}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match locov::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
