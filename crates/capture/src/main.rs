// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! catch-output binary entry point.

use std::process::{Command, ExitCode};

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use catch_output::cli::Cli;
use catch_output::env;
use catch_output::output::Report;
use catch_output::Capture;

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("catch-output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = cli.capture_config()?;
    let (program, args) = cli.command.split_first().ok_or("missing command")?;

    tracing::debug!(%program, ?args, "running command under capture");
    let (status, output) =
        Capture::with_config(config).run_with(|| Command::new(program).args(args).status())?;

    let status = status.map_err(|e| format!("failed to run {}: {}", program, e))?;
    println!("{}", Report::new(&output, status.code()).render(cli.format)?);

    if let Some(marker) = &cli.marker {
        println!("{}", marker);
        eprintln!("{}", marker);
    }

    let code = status
        .code()
        .and_then(|code| u8::try_from(code).ok())
        .map_or(ExitCode::FAILURE, ExitCode::from);
    Ok(code)
}

/// Log to stderr, filtered by `CATCH_OUTPUT_LOG`.
fn init_logging() {
    let filter = env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(env::DEFAULT_LOG_FILTER));

    let console_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
