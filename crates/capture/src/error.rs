// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::{CaptureResult, Stream};
use thiserror::Error;

/// Errors that can occur while capturing output
///
/// Every variant is returned only after the diverted descriptors have been
/// put back.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Capture started from inside a captured unit of work")]
    Nested,

    #[error("Another capture window is already open")]
    Busy,

    #[error("Failed to create capture buffer: {0}")]
    Buffer(#[source] std::io::Error),

    #[error("Failed to redirect {stream}: {source}")]
    Redirect {
        stream: Stream,
        #[source]
        source: nix::Error,
    },

    #[error("Failed to restore {stream}: {source}")]
    Restore {
        stream: Stream,
        #[source]
        source: nix::Error,
    },

    #[error("Failed to read captured {stream}: {source}")]
    Read {
        stream: Stream,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start capture thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Captured unit of work panicked: {message}")]
    Panicked {
        message: String,
        /// Output written before the panic
        output: CaptureResult,
    },
}

impl CaptureError {
    /// Partial output, if the unit of work ran before failing
    pub fn output(&self) -> Option<&CaptureResult> {
        match self {
            CaptureError::Panicked { output, .. } => Some(output),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
