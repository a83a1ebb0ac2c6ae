// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output streams that can be diverted.

use std::fmt;
use std::io::Write;
use std::os::fd::RawFd;

/// A file descriptor a [`Redirect`](crate::Redirect) can divert
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    /// Descriptor 1
    Stdout,
    /// Descriptor 2
    Stderr,
    /// Any other open descriptor
    Fd(RawFd),
}

impl Stream {
    /// Raw descriptor number
    pub fn fd(self) -> RawFd {
        match self {
            Stream::Stdout => 1,
            Stream::Stderr => 2,
            Stream::Fd(fd) => fd,
        }
    }

    pub fn name(self) -> String {
        match self {
            Stream::Stdout => "stdout".to_string(),
            Stream::Stderr => "stderr".to_string(),
            Stream::Fd(fd) => format!("fd {}", fd),
        }
    }

    /// Flush the std handle buffering in front of this descriptor.
    ///
    /// `std::io::Stdout` holds a line buffer, so text written without a
    /// trailing newline would otherwise land on whichever descriptor is
    /// current at the next flush.
    pub fn flush(self) {
        match self {
            Stream::Stdout => {
                let _ = std::io::stdout().flush();
            }
            Stream::Stderr => {
                let _ = std::io::stderr().flush();
            }
            Stream::Fd(_) => {}
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
