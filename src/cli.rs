use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "golangci-teamcity",
    version,
    about = "Convert golangci-lint JSON output into TeamCity test service messages"
)]
pub struct Cli {
    /// Report file to read instead of stdin ("-" for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Config file to use instead of ./golangci-teamcity.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Order in which linters are emitted
    #[arg(long, value_enum)]
    pub order: Option<Order>,

    /// How to handle issues from linters missing in the report's linter list
    #[arg(long, value_enum)]
    pub unknown_linter: Option<UnknownLinter>,

    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Order {
    Name,
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum UnknownLinter {
    Fail,
    Synthesize,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
