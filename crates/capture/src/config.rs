// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default name of the worker thread that runs the unit of work
pub const DEFAULT_THREAD_NAME: &str = "catch-output";

fn default_true() -> bool {
    true
}

fn default_thread_name() -> String {
    DEFAULT_THREAD_NAME.to_string()
}

/// Errors that can occur when loading a capture configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read capture config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Which streams a capture diverts and how its worker is named
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaptureConfig {
    /// Divert standard output (default: true)
    #[serde(default = "default_true")]
    pub stdout: bool,

    /// Divert standard error (default: true)
    #[serde(default = "default_true")]
    pub stderr: bool,

    /// Worker thread name, shown in panic messages (default: "catch-output")
    #[serde(default = "default_thread_name")]
    pub thread_name: String,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            stdout: true,
            stderr: true,
            thread_name: default_thread_name(),
        }
    }
}

impl CaptureConfig {
    /// Load a configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
