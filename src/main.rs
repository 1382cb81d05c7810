// src/main.rs
use std::{env, process::ExitCode};

use clap::Parser;
use env_logger::Builder;
use prefix_lines::{app, args::Args, config::Config};

/// Configure and initialize the logger.
/// Read log configuration parameters from the environment if RUST_LOG
/// is set. Otherwise, log at the severity of error only.
fn initialize_log() {
    let mut builder = Builder::new();

    if let Ok(s) = env::var("RUST_LOG") {
        builder.parse_filters(&s);
    }

    builder.init();
}

fn main() -> ExitCode {
    initialize_log();

    let config = Config::from(Args::parse());

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
