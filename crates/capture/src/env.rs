// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

/// Name of the variable holding the `tracing` filter directive.
pub const CATCH_OUTPUT_LOG: &str = "CATCH_OUTPUT_LOG";

/// Name of the variable the CLI reads its `--config` path from.
pub const CATCH_OUTPUT_CONFIG: &str = "CATCH_OUTPUT_CONFIG";

/// Filter used when `CATCH_OUTPUT_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// `CATCH_OUTPUT_LOG`: log filter for the CLI, e.g. `catch_output=debug`.
pub fn log_filter() -> Option<String> {
    std::env::var(CATCH_OUTPUT_LOG)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
