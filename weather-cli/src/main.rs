//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Terminal styling
//! - Human-friendly output formatting

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;
mod style;

use style::{Ansi, Plain, Style};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();

    let style: Box<dyn Style> = if std::io::stdout().is_terminal() {
        Box::new(Ansi)
    } else {
        Box::new(Plain)
    };

    match cmd.run(style.as_ref()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", style.alert(&format!("Error: {err}")));
            ExitCode::FAILURE
        }
    }
}
