// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! shelldeck: serve a catalog of shell commands as a web dashboard API.

mod color;
mod commands;
mod exit_error;
mod logging;
mod output;

use clap::{Parser, Subcommand};

use crate::exit_error::ExitError;

#[derive(Parser)]
#[command(name = "shelldeck", version, about, styles = color::styles())]
struct Cli {
    /// Log filter (e.g. `info`, `sd_server=debug`); overrides SHELLDECK_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the dashboard API
    Serve(commands::serve::ServeArgs),
    /// Validate a catalog and summarize it
    Check(commands::check::CheckArgs),
    /// Generate a catalog from another format
    Generate(commands::generate::GenerateArgs),
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref(), cli.log_json);

    if let Err(err) = run(cli.command) {
        match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("error: {}", exit.message);
                }
                std::process::exit(exit.code());
            }
            None => {
                eprintln!("error: {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve(args) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(commands::serve::handle(args))
        }
        Command::Check(args) => commands::check::handle(args),
        Command::Generate(args) => commands::generate::handle(args),
    }
}
