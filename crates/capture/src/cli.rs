// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface definition.

use crate::{CaptureConfig, ConfigError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report format for captured output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Text,
}

/// Run a command with its standard output and standard error captured
#[derive(Parser, Debug, Clone)]
#[command(name = "catch-output", version)]
#[command(about = "Run a command with its stdout and stderr captured")]
pub struct Cli {
    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// TOML capture configuration
    #[arg(short, long, value_name = "PATH", env = "CATCH_OUTPUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Leave standard output uncaptured
    #[arg(long)]
    pub no_stdout: bool,

    /// Leave standard error uncaptured
    #[arg(long)]
    pub no_stderr: bool,

    /// Write TEXT to the real stdout and stderr once the capture window closes
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// Command to run and its arguments
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// Config file (or defaults) with the `--no-*` flags applied
    pub fn capture_config(&self) -> Result<CaptureConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CaptureConfig::load(path)?,
            None => CaptureConfig::default(),
        };
        if self.no_stdout {
            config.stdout = false;
        }
        if self.no_stderr {
            config.stderr = false;
        }
        Ok(config)
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
