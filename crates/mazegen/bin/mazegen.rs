//! Maze level generator
//!
//! Main entry point for the command line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use mazegen::{Args, log_filter, run};

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_filter(args.verbose)),
    )
    .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args.command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mazegen: {err}");
            ExitCode::FAILURE
        }
    }
}
