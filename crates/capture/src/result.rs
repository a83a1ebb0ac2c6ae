// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::{Deserialize, Serialize};

/// Text written to standard output and standard error during a capture
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureResult {
    stdout: String,
    stderr: String,
}

impl CaptureResult {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Captured standard output (empty if nothing was written)
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Captured standard error (empty if nothing was written)
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// True when neither stream received any text
    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty() && self.stderr.is_empty()
    }

    /// Take ownership of `(stdout, stderr)`
    pub fn into_parts(self) -> (String, String) {
        (self.stdout, self.stderr)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
