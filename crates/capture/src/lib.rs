// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped capture of process output for test assertions.
//!
//! The standard output and standard error descriptors are diverted into
//! anonymous files while a unit of work runs on a worker thread, then
//! restored before the captured text is handed back.
//!
//! ```no_run
//! use std::io::Write;
//!
//! let output = catch_output::capture_output(|| {
//!     let _ = std::io::stdout().write_all(b"hello");
//! })?;
//! assert_eq!(output.stdout(), "hello");
//! assert_eq!(output.stderr(), "");
//! # Ok::<(), catch_output::CaptureError>(())
//! ```

mod capture;
pub mod cli;
mod config;
pub mod env;
mod error;
pub mod output;
mod redirect;
mod result;
mod stream;

pub use capture::{capture_output, capture_with, Capture};
pub use config::{CaptureConfig, ConfigError, DEFAULT_THREAD_NAME};
pub use error::CaptureError;
pub use redirect::Redirect;
pub use result::CaptureResult;
pub use stream::Stream;
