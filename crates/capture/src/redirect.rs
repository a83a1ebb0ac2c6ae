// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Descriptor redirection guard.

use crate::{CaptureError, Stream};
use nix::unistd::{close, dup, dup2};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::os::fd::{AsRawFd, RawFd};

/// Diverts one stream into an anonymous file until finished or dropped
///
/// The buffer is a file rather than a pipe so the writer never blocks
/// waiting for a reader.
#[derive(Debug)]
pub struct Redirect {
    stream: Stream,
    saved: RawFd,
    buffer: File,
    restored: bool,
}

impl Redirect {
    /// Point `stream` at a fresh buffer, keeping a duplicate of the original
    pub fn begin(stream: Stream) -> Result<Self, CaptureError> {
        stream.flush();

        let buffer = tempfile::tempfile().map_err(CaptureError::Buffer)?;
        let saved =
            dup(stream.fd()).map_err(|source| CaptureError::Redirect { stream, source })?;

        if let Err(source) = dup2(buffer.as_raw_fd(), stream.fd()) {
            let _ = close(saved);
            return Err(CaptureError::Redirect { stream, source });
        }

        Ok(Self {
            stream,
            saved,
            buffer,
            restored: false,
        })
    }

    pub fn stream(&self) -> Stream {
        self.stream
    }

    /// Restore the stream and return everything written to it
    pub fn finish(mut self) -> Result<String, CaptureError> {
        self.restore()?;

        let stream = self.stream;
        let mut bytes = Vec::new();
        self.buffer
            .seek(SeekFrom::Start(0))
            .and_then(|_| self.buffer.read_to_end(&mut bytes))
            .map_err(|source| CaptureError::Read { stream, source })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Put the original descriptor back. On failure the guard stays armed
    /// and keeps its saved duplicate, so a later call may retry.
    fn restore(&mut self) -> Result<(), CaptureError> {
        if self.restored {
            return Ok(());
        }
        self.stream.flush();

        dup2(self.saved, self.stream.fd()).map_err(|source| CaptureError::Restore {
            stream: self.stream,
            source,
        })?;
        let _ = close(self.saved);
        self.restored = true;
        Ok(())
    }
}

impl Drop for Redirect {
    fn drop(&mut self) {
        if self.restore().is_err() {
            let _ = close(self.saved);
        }
    }
}

#[cfg(test)]
#[path = "redirect_tests.rs"]
mod tests;
