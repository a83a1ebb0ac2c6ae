// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report rendering for the CLI.

use crate::cli::Format;
use crate::CaptureResult;
use serde::Serialize;

/// What the CLI reports after a capture
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
    /// Exit code, or `None` if the command was terminated by a signal
    pub status: Option<i32>,
}

impl<'a> Report<'a> {
    pub fn new(output: &'a CaptureResult, status: Option<i32>) -> Self {
        Self {
            stdout: output.stdout(),
            stderr: output.stderr(),
            status,
        }
    }

    pub fn render(&self, format: Format) -> Result<String, serde_json::Error> {
        match format {
            Format::Json => serde_json::to_string_pretty(self),
            Format::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let status = match self.status {
            Some(code) => code.to_string(),
            None => "signal".to_string(),
        };
        format!(
            "--- stdout ---\n{}\n--- stderr ---\n{}\n--- status: {} ---",
            self.stdout, self.stderr, status
        )
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
