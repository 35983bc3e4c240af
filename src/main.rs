mod cli;
mod config;
mod error;
mod input;
mod normalize;
mod teamcity;
mod types;

use crate::error::Error;
use crate::normalize::NormalizeOptions;
use crate::teamcity::clock::SystemClock;
use crate::teamcity::emitter::Emitter;
use crate::types::config::{RecordOrder, UnknownLinterPolicy};
use clap::Parser;
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INPUT_FAILURE: i32 = 1;
    pub const OUTPUT_FAILURE: i32 = 2;
    pub const CONFIG_FAILURE: i32 = 3;
}

fn init_tracing(level: &str) {
    // stdout carries service messages only
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> Result<i32, Error> {
    let cli = cli::Cli::parse();
    init_tracing(cli.log_level());
    tracing::debug!("golangci-teamcity v{}", env!("CARGO_PKG_VERSION"));

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;

    let options = NormalizeOptions {
        unknown_linter: match cli.unknown_linter {
            Some(cli::UnknownLinter::Fail) => UnknownLinterPolicy::Fail,
            Some(cli::UnknownLinter::Synthesize) => UnknownLinterPolicy::Synthesize,
            None => loaded.unknown_linter(),
        },
        order: match cli.order {
            Some(cli::Order::Name) => RecordOrder::Name,
            Some(cli::Order::Report) => RecordOrder::Report,
            None => loaded.order(),
        },
    };

    let result = input::load(cli.input.as_deref())?;
    let tests = normalize::normalize(&result, options)?;

    let stdout = io::stdout();
    let mut emitter = Emitter::new(BufWriter::new(stdout.lock()), SystemClock);
    emitter.emit_all(&tests)?;
    let (_, summary) = emitter.finish()?;

    tracing::info!(
        tests = summary.tests,
        passed = summary.passed,
        failed = summary.failed,
        ignored = summary.ignored,
        lines = summary.lines,
        "service messages written"
    );
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
