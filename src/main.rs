//! Coffee Cart CLI

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;

mod cli;
mod config;
mod logging;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (ignore if missing)
    _ = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = logging::init(&cli.config.logging) {
        report(&format!("failed to initialise logging: {error}"));
        return ExitCode::FAILURE;
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(&error);
            ExitCode::FAILURE
        }
    }
}

fn report(message: &str) {
    _ = writeln!(io::stderr().lock(), "{message}");
}
