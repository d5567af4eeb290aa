//! Command-line interface layer.

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result)?;

    Ok(ExitStatus::from_error_count(result.error_count))
}

/// Initialize the stderr logger.
///
/// `RUST_LOG` is respected; `-v` raises the level to debug.
pub fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
