//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Audit locale coverage against the reference locale
//! - `keys`: Print the leaf paths of one locale file
//! - `init`: Initialize locov configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's arguments.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Keys(cmd)) => cmd.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the locales directory.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root directory, where the config search starts
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Locales directory path (overrides config file)
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Reference locale (overrides config file)
    #[arg(long)]
    pub reference: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// List missing keys for locales at or above this coverage (overrides config file)
    #[arg(long, value_name = "PERCENT")]
    pub threshold: Option<f64>,

    /// Fail when a locale's coverage is below this value (overrides config file)
    #[arg(long, value_name = "PERCENT")]
    pub min_coverage: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Locale file to read
    pub file: PathBuf,

    /// Print the value of each key as well
    #[arg(long)]
    pub values: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report how completely each locale covers the reference locale
    Check(CheckCommand),
    /// Print the dot-joined key paths of a locale file
    Keys(KeysCommand),
    /// Initialize a new .locovrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
