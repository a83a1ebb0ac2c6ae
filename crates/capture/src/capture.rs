// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture window: redirect, run the unit of work on a worker thread, restore.

use crate::{CaptureConfig, CaptureError, CaptureResult, Redirect, Stream};
use parking_lot::{const_mutex, Mutex};
use std::any::Any;
use std::cell::Cell;

/// Descriptors 1 and 2 are process-wide; only one window may be open.
/// Held without waiting: a second capture fails with [`CaptureError::Busy`].
static CAPTURE_LOCK: Mutex<()> = const_mutex(());

thread_local! {
    /// Set on worker threads so a nested capture fails instead of deadlocking.
    static IN_CAPTURE: Cell<bool> = const { Cell::new(false) };
}

/// Run `work` with standard output and standard error captured.
///
/// If `work` panics, both streams are restored and the partial output is
/// returned inside [`CaptureError::Panicked`].
///
/// Only one capture window may be open per process. A capture started while
/// another is open, including from a thread spawned by `work`, returns
/// [`CaptureError::Busy`] instead of waiting.
pub fn capture_output<F>(work: F) -> Result<CaptureResult, CaptureError>
where
    F: FnOnce() + Send,
{
    Capture::new().run(work)
}

/// Like [`capture_output`], also returning the value produced by `work`.
pub fn capture_with<T, F>(work: F) -> Result<(T, CaptureResult), CaptureError>
where
    F: FnOnce() -> T + Send,
    T: Send,
{
    Capture::new().run_with(work)
}

/// Reusable capture runner
#[derive(Clone, Debug, Default)]
pub struct Capture {
    config: CaptureConfig,
}

impl Capture {
    /// Capture both streams on a worker named [`DEFAULT_THREAD_NAME`](crate::DEFAULT_THREAD_NAME)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CaptureConfig) -> Self {
        Self { config }
    }

    /// Whether standard output is diverted
    pub fn stdout(mut self, enabled: bool) -> Self {
        self.config.stdout = enabled;
        self
    }

    /// Whether standard error is diverted
    pub fn stderr(mut self, enabled: bool) -> Self {
        self.config.stderr = enabled;
        self
    }

    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.config.thread_name = name.into();
        self
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Run `work` inside a capture window and return what it wrote
    pub fn run<F>(&self, work: F) -> Result<CaptureResult, CaptureError>
    where
        F: FnOnce() + Send,
    {
        self.run_with(work).map(|((), output)| output)
    }

    /// Run `work` inside a capture window, returning its value and output
    pub fn run_with<T, F>(&self, work: F) -> Result<(T, CaptureResult), CaptureError>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        if IN_CAPTURE.with(Cell::get) {
            return Err(CaptureError::Nested);
        }
        // A helper thread of a running unit of work cannot be told apart from
        // an unrelated caller, and waiting would deadlock the former.
        let _window = CAPTURE_LOCK.try_lock().ok_or(CaptureError::Busy)?;

        tracing::debug!(
            stdout = self.config.stdout,
            stderr = self.config.stderr,
            thread = %self.config.thread_name,
            "opening capture window"
        );

        // Guards restore on drop, so an early return below leaves no stream
        // diverted.
        let stdout = open(Stream::Stdout, self.config.stdout)?;
        let stderr = open(Stream::Stderr, self.config.stderr)?;
        let joined = self.execute(work);
        let output = CaptureResult::new(close(stdout)?, close(stderr)?);

        tracing::debug!(
            stdout_bytes = output.stdout().len(),
            stderr_bytes = output.stderr().len(),
            "capture window closed"
        );

        match joined? {
            Ok(value) => Ok((value, output)),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::debug!(%message, "captured unit of work panicked");
                Err(CaptureError::Panicked { message, output })
            }
        }
    }

    fn execute<T, F>(&self, work: F) -> Result<std::thread::Result<T>, CaptureError>
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        // Thread names may not contain NUL.
        let name = self.config.thread_name.replace('\0', "");

        std::thread::scope(|scope| {
            let handle = std::thread::Builder::new()
                .name(name)
                .spawn_scoped(scope, move || {
                    IN_CAPTURE.with(|flag| flag.set(true));
                    work()
                })
                .map_err(CaptureError::Spawn)?;
            Ok(handle.join())
        })
    }
}

fn open(stream: Stream, enabled: bool) -> Result<Option<Redirect>, CaptureError> {
    enabled.then(|| Redirect::begin(stream)).transpose()
}

fn close(redirect: Option<Redirect>) -> Result<String, CaptureError> {
    Ok(redirect
        .map(Redirect::finish)
        .transpose()?
        .unwrap_or_default())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
